//! Host settings, read from the environment (a `.env` file is honoured).

use thiserror::Error;

pub const HOST_KEY: &str = "STORE_MAP_HOST";
pub const PORT_KEY: &str = "STORE_MAP_PORT";
pub const OPEN_BROWSER_KEY: &str = "STORE_MAP_OPEN_BROWSER";
pub const LANDING_PATH_KEY: &str = "STORE_MAP_LANDING_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Open the landing page in the default browser once the server is up.
    pub open_browser: bool,
    /// Target of the `/` redirect.
    pub landing_path: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: false,
            landing_path: "/ui/store-market-map".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {key}")]
pub struct InvalidSetting {
    pub key: &'static str,
    pub value: String,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, InvalidSetting> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, InvalidSetting>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_KEY).filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_KEY) {
            config.port = port.trim().parse().map_err(|_| InvalidSetting {
                key: PORT_KEY,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = lookup(OPEN_BROWSER_KEY) {
            config.open_browser = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(InvalidSetting {
                        key: OPEN_BROWSER_KEY,
                        value: flag,
                    })
                }
            };
        }
        if let Some(path) = lookup(LANDING_PATH_KEY).filter(|v| v.starts_with('/')) {
            config.landing_path = path;
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> Result<HostConfig, InvalidSetting> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        HostConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(from(&[]).unwrap(), HostConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = from(&[
            (HOST_KEY, "0.0.0.0"),
            (PORT_KEY, "9000"),
            (OPEN_BROWSER_KEY, "yes"),
            (LANDING_PATH_KEY, "/ui/other"),
        ])
        .unwrap();

        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(config.open_browser);
        assert_eq!(config.landing_path, "/ui/other");
    }

    #[test]
    fn rejects_bad_port_and_flag() {
        assert_eq!(from(&[(PORT_KEY, "eighty")]).unwrap_err().key, PORT_KEY);
        assert_eq!(from(&[(OPEN_BROWSER_KEY, "maybe")]).unwrap_err().key, OPEN_BROWSER_KEY);
    }
}
