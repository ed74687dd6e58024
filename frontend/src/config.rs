use common::config::{
    AppConfig, API_BASE_KEY, IDENTITY_API_KEY_KEY, IDENTITY_APP_ID_KEY,
    IDENTITY_AUTH_DOMAIN_KEY, IDENTITY_PROJECT_ID_KEY, LANDING_PATH_KEY, LOGIN_PATH_KEY,
    REFRESH_DELAY_KEY,
};
use common::error::ConfigError;

/// Configuration baked in at build time from `STORE_MAP_*` variables.
pub fn app_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(build_env)
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_KEY => option_env!("STORE_MAP_API_BASE"),
        LOGIN_PATH_KEY => option_env!("STORE_MAP_LOGIN_PATH"),
        LANDING_PATH_KEY => option_env!("STORE_MAP_LANDING_PATH"),
        REFRESH_DELAY_KEY => option_env!("STORE_MAP_REFRESH_DELAY_MS"),
        IDENTITY_API_KEY_KEY => option_env!("STORE_MAP_IDENTITY_API_KEY"),
        IDENTITY_AUTH_DOMAIN_KEY => option_env!("STORE_MAP_IDENTITY_AUTH_DOMAIN"),
        IDENTITY_PROJECT_ID_KEY => option_env!("STORE_MAP_IDENTITY_PROJECT_ID"),
        IDENTITY_APP_ID_KEY => option_env!("STORE_MAP_IDENTITY_APP_ID"),
        _ => None,
    };
    value.map(str::to_string)
}
