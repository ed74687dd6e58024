//! Page configuration.
//!
//! Values come from a key lookup so the browser build can feed build-time
//! environment and tests can feed a map. Every key is optional.

use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

pub const API_BASE_KEY: &str = "STORE_MAP_API_BASE";
pub const LOGIN_PATH_KEY: &str = "STORE_MAP_LOGIN_PATH";
pub const LANDING_PATH_KEY: &str = "STORE_MAP_LANDING_PATH";
pub const REFRESH_DELAY_KEY: &str = "STORE_MAP_REFRESH_DELAY_MS";
pub const IDENTITY_API_KEY_KEY: &str = "STORE_MAP_IDENTITY_API_KEY";
pub const IDENTITY_AUTH_DOMAIN_KEY: &str = "STORE_MAP_IDENTITY_AUTH_DOMAIN";
pub const IDENTITY_PROJECT_ID_KEY: &str = "STORE_MAP_IDENTITY_PROJECT_ID";
pub const IDENTITY_APP_ID_KEY: &str = "STORE_MAP_IDENTITY_APP_ID";

/// Settings handed to the identity provider's SDK when it is initialised.
/// Field names follow the SDK's own configuration object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix joined to every backend path. Empty means same origin.
    pub api_base: String,
    pub login_path: String,
    /// Where a successful sign-in lands.
    pub landing_path: String,
    /// Wait between a successful save and re-reading the mappings. The
    /// backend offers no consistency signal, so this is best-effort.
    pub refresh_delay: Duration,
    pub identity: IdentityProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: "/login".to_string(),
            landing_path: "/ui/store-market-map".to_string(),
            refresh_delay: Duration::from_millis(3000),
            identity: IdentityProviderConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let refresh_delay = match lookup(REFRESH_DELAY_KEY) {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: REFRESH_DELAY_KEY.to_string(),
                    reason: e.to_string(),
                }
            })?),
            None => defaults.refresh_delay,
        };

        Ok(Self {
            api_base: text(API_BASE_KEY, defaults.api_base),
            login_path: text(LOGIN_PATH_KEY, defaults.login_path),
            landing_path: text(LANDING_PATH_KEY, defaults.landing_path),
            refresh_delay,
            identity: IdentityProviderConfig {
                api_key: text(IDENTITY_API_KEY_KEY, String::new()),
                auth_domain: text(IDENTITY_AUTH_DOMAIN_KEY, String::new()),
                project_id: text(IDENTITY_PROJECT_ID_KEY, String::new()),
                app_id: text(IDENTITY_APP_ID_KEY, String::new()),
            },
        })
    }
}
