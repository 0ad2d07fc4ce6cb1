use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::upload_settings")]
    pub uploads: UploadSettings,
    #[serde(default = "super::defaults::site_settings")]
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_body_size")]
    pub max_body_size_mb: usize,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::streaming_threshold_mb")]
    pub streaming_threshold_mb: u64,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "super::defaults::public_dir")]
    pub public_dir: String,
    #[serde(default = "super::defaults::default_directory")]
    pub default_directory: String,
    #[serde(default = "super::defaults::retry_settings")]
    pub retry: RetrySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrySettings {
    #[serde(default = "super::defaults::max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "super::defaults::initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "super::defaults::max_delay_ms")]
    pub max_delay_ms: u64,
}

impl RetrySettings {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default = "super::defaults::documents_path")]
    pub documents_path: String,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let retry = &self.uploads.retry;
        if retry.max_attempts == 0 {
            return Err(ConfigError::InvalidConfig(
                "uploads.retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if retry.initial_delay_ms > retry.max_delay_ms {
            return Err(ConfigError::InvalidConfig(format!(
                "uploads.retry.initial_delay_ms ({}) exceeds max_delay_ms ({})",
                retry.initial_delay_ms, retry.max_delay_ms
            )));
        }
        if self.uploads.default_directory.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "uploads.default_directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CONFIG_TEMPLATE;

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.uploads.public_dir, "public");
        assert_eq!(config.uploads.default_directory, "articles");
        assert_eq!(config.uploads.retry.max_attempts, 3);
        assert_eq!(config.uploads.retry.initial_delay(), Duration::from_millis(1000));
        assert_eq!(config.uploads.retry.max_delay(), Duration::from_millis(5000));
        assert_eq!(config.site.documents_path, "data/sites.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.uploads.retry.max_attempts, 3);
        assert_eq!(config.server.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_validate_rejects_bad_retry() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        config.uploads.retry.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));

        let mut config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        config.uploads.retry.initial_delay_ms = 10_000;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));
    }
}
