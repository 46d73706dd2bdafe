//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CSRF_COOKIE_NAME, DEFAULT_CSRF_HEADER_NAME, DEFAULT_CSRF_PATH,
    DEFAULT_NAV_PATH_PREFIX, DEFAULT_NOTIFICATION_DURATION_MS, DEFAULT_REQUEST_TIMEOUT_SECONDS,
};

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub navigation: NavigationSettings,
    pub notification: NotificationSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub csrf_path: String,
    /// Pre-shared CSRF token; skips the bootstrap request when set.
    pub csrf_token: Option<String>,
    pub bearer_token: Option<String>,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER_NAME.to_string(),
            csrf_path: DEFAULT_CSRF_PATH.to_string(),
            csrf_token: None,
            bearer_token: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// Route prefix stripped from menu paths to build short navigation ids.
    pub path_prefix: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self { path_prefix: DEFAULT_NAV_PATH_PREFIX.to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    pub default_duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    /// Directory for daily rolling log files, stdout only when absent.
    pub directory: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false, directory: None }
    }
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "sso-console")?
            .set_default("api.base_url", "http://127.0.0.1:8080")?
            .set_default("api.timeout_seconds", DEFAULT_REQUEST_TIMEOUT_SECONDS)?
            .set_default("api.csrf_cookie_name", DEFAULT_CSRF_COOKIE_NAME)?
            .set_default("api.csrf_header_name", DEFAULT_CSRF_HEADER_NAME)?
            .set_default("api.csrf_path", DEFAULT_CSRF_PATH)?
            .set_default("navigation.path_prefix", DEFAULT_NAV_PATH_PREFIX)?
            .set_default("notification.default_duration_ms", DEFAULT_NOTIFICATION_DURATION_MS)?
            .set_default("log.level", "info")?
            .set_default("log.json", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: ConsoleConfig = ConsoleConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.name, "sso-console");
        assert_eq!(config.api.csrf_header_name, DEFAULT_CSRF_HEADER_NAME);
        assert!(config.api.bearer_token.is_none());
        assert_eq!(config.navigation.path_prefix, "/admin/");
        assert_eq!(config.notification.default_duration_ms, 4000);
        assert!(!config.log.json);
    }

    #[test]
    fn test_override_source_wins() {
        let config: ConsoleConfig = ConsoleConfig::defaults()
            .unwrap()
            .set_override("api.base_url", "https://iam.example.com")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "https://iam.example.com");
    }
}
