//! Configuration loading utilities

use config::{Config, Environment, File};

use crate::{ConfigError, Settings};

/// Load settings from `config/config.toml` (optional) and the environment
///
/// Environment variables use the `STABLEFLOW` prefix with `__` as the
/// section separator, e.g. `STABLEFLOW__API__BASE_URL`.
pub fn load_config() -> Result<Settings, ConfigError> {
	let raw = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("STABLEFLOW").separator("__"))
		.build()?;

	let settings: Settings = raw.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
