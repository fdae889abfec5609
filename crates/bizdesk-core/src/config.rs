//! Application Configuration
//!
//! Loaded from the JSON bundled with the front end. Every key is optional;
//! missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::PageSize;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported page size {0}, expected 5, 10, 20 or 50")]
    PageSize(usize),
    #[error("Log capacity must be at least 1")]
    LogCapacity,
    #[error("Login email can not be empty")]
    LoginEmail,
}

/// Credentials accepted by the static authenticator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            display_name: "Admin User".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_title: String,
    pub organization: String,
    pub default_page_size: usize,
    pub login: LoginConfig,
    /// Lines kept by the in-app activity log
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Admin Panel".to_string(),
            organization: "M/S Sharif Traders".to_string(),
            default_page_size: 10,
            login: LoginConfig::default(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if PageSize::from_usize(self.default_page_size).is_none() {
            return Err(ConfigError::PageSize(self.default_page_size));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::LogCapacity);
        }
        if self.login.email.trim().is_empty() {
            return Err(ConfigError::LoginEmail);
        }
        Ok(())
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::from_usize(self.default_page_size).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.login.email, "admin@example.com");
        assert_eq!(config.page_size(), PageSize::Ten);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"default_page_size": 20, "login": {"password": "s3cret"}}"#).unwrap();
        assert_eq!(config.page_size(), PageSize::Twenty);
        assert_eq!(config.login.password, "s3cret");
        assert_eq!(config.login.display_name, "Admin User");
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        let err = AppConfig::from_json(r#"{"default_page_size": 15}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PageSize(15)));
    }

    #[test]
    fn test_rejects_zero_log_capacity() {
        assert!(matches!(
            AppConfig::from_json(r#"{"log_capacity": 0}"#),
            Err(ConfigError::LogCapacity)
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Config parse error"));
    }
}
