//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings needed to wire the senders use cases to storage.
pub struct ServerConfig {
    pub database_url: String,
}

impl ServerConfig {
    /// Loads `default.yaml`, the optional `{APP_ENV}.yaml` profile and `APP_*`
    /// environment overrides from `config_dir`.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = config_dir.as_ref();
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let settings = Config::builder()
            .add_source(File::from(config_dir.join("default")))
            .add_source(File::from(config_dir.join(&app_env)).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        log::debug!("Loaded server config for profile `{app_env}`");

        Ok(server_config)
    }
}
