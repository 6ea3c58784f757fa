//! Configuration settings structures

use serde::{Deserialize, Serialize};

use stableflow_types::constants::DEFAULT_BASE_URL;

use crate::ConfigError;

/// Main SDK settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub api: ApiSettings,
	pub logging: LoggingSettings,
}

/// Backend API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
	/// Base URL of the StableFlow backend
	pub base_url: String,
	/// Fixed bearer token; `None` defers to the environment or a provider
	pub bearer_token: Option<String>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			api: ApiSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			bearer_token: None,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

impl Settings {
	/// Validate the loaded settings before anything consumes them
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api.base_url.trim().is_empty() {
			return Err(ConfigError::Invalid {
				field: "api.base_url".to_string(),
				reason: "must not be empty".to_string(),
			});
		}
		if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
			return Err(ConfigError::Invalid {
				field: "api.base_url".to_string(),
				reason: format!("'{}' is not an http(s) URL", self.api.base_url),
			});
		}
		if let Some(token) = &self.api.bearer_token {
			if token.trim().is_empty() {
				return Err(ConfigError::Invalid {
					field: "api.bearer_token".to_string(),
					reason: "must not be blank when set".to_string(),
				});
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_valid() {
		let settings = Settings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
		assert_eq!(settings.logging.level, "info");
		assert_eq!(settings.logging.format, LogFormat::Compact);
	}

	#[test]
	fn test_empty_base_url_rejected() {
		let mut settings = Settings::default();
		settings.api.base_url = "  ".to_string();
		assert!(matches!(
			settings.validate().unwrap_err(),
			ConfigError::Invalid { ref field, .. } if field == "api.base_url"
		));
	}

	#[test]
	fn test_non_http_base_url_rejected() {
		let mut settings = Settings::default();
		settings.api.base_url = "ftp://api.stableflow.ai".to_string();
		assert!(settings.validate().is_err());
	}

	#[test]
	fn test_blank_token_rejected() {
		let mut settings = Settings::default();
		settings.api.bearer_token = Some(String::new());
		assert!(settings.validate().is_err());
	}

	#[test]
	fn test_partial_deserialization_fills_defaults() {
		let settings: Settings =
			serde_json::from_str(r#"{"logging": {"level": "debug"}}"#).unwrap();
		assert_eq!(settings.logging.level, "debug");
		assert_eq!(settings.logging.format, LogFormat::Compact);
		assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
	}
}
