use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
    pub ui: UiConfig,
}

/// Demo credential pair accepted by the login form
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    /// Token handed to the auth store after a successful login
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "admin@gmail.com".to_string(),
            password: "password".to_string(),
            token: "demo-token".to_string(),
        }
    }
}

/// Storage keys, one per store
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub auth_key: String,
    pub merchants_key: String,
    pub ui_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            auth_key: "auth-storage".to_string(),
            merchants_key: "merchants-storage".to_string(),
            ui_key: "ui-storage".to_string(),
        }
    }
}

/// Artificial delays (milliseconds) used to show loading states
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u32,
    pub list_load_ms: u32,
    pub dashboard_ms: u32,
    pub save_ms: u32,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 600,
            list_load_ms: 500,
            dashboard_ms: 1000,
            save_ms: 400,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub sidebar_open: bool,
    /// Rows in the dashboard "top merchants" table; all merchants when absent
    pub top_merchants_limit: Option<usize>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            top_merchants_limit: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[auth]
email = "admin@gmail.com"
password = "password"
token = "demo-token"

[storage]
auth_key = "auth-storage"
merchants_key = "merchants-storage"
ui_key = "ui-storage"

[latency]
login_ms = 600
list_load_ms = 500
dashboard_ms = 1000
save_ms = 400

[ui]
sidebar_open = true
# top_merchants_limit = 10
"#;

impl AppConfig {
    /// Parse a TOML document; sections and keys that are absent keep defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// The embedded default configuration
    pub fn embedded() -> Self {
        match Self::from_toml_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded config is invalid, using built-in defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Load configuration, applying an optional TOML override on top of the
/// embedded defaults.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<AppConfig> {
    match overrides {
        Some(contents) => {
            log::info!("Loading config from override");
            AppConfig::from_toml_str(contents)
        }
        None => {
            log::info!("Using default embedded configuration");
            AppConfig::from_toml_str(DEFAULT_CONFIG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.merchants_key, "merchants-storage");
        assert_eq!(config.latency.login_ms, 600);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[latency]\nlist_load_ms = 0\n")).unwrap();
        assert_eq!(config.latency.list_load_ms, 0);
        assert_eq!(config.latency.dashboard_ms, 1000);
        assert_eq!(config.auth.email, "admin@gmail.com");
    }

    #[test]
    fn test_top_merchants_limit() {
        let config = load_config(Some("[ui]\ntop_merchants_limit = 5\n")).unwrap();
        assert_eq!(config.ui.top_merchants_limit, Some(5));
        assert!(config.ui.sidebar_open);
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[latency]\nlogin_ms = \"slow\"\n")).is_err());
    }
}
