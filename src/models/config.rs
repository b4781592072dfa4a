use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Prefix for environment variables that override file settings, e.g. `TRIPS_WEB_BASE_URL`
pub const ENV_PREFIX: &str = "TRIPS";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database_path: String,
    pub port: u16,
    pub bind_address: String,
    pub log_path: String,
    pub log_level: String,
    pub web_base_url: String,             // Where participants land after confirming
    max_workers: Option<usize>,           // Optional, defaults to CPU count
    db_pool_max_size: Option<u32>,        // Maximum number of connections in pool
    db_pool_min_idle: Option<u32>,        // Minimum idle connections to maintain
    db_pool_timeout_seconds: Option<u64>, // Connection acquisition timeout
}

impl AppConfig {
    /// Load settings from a TOML file, overlaid by `TRIPS_*` process environment variables
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        Self::load(path.as_ref(), None)
    }

    /// `env` replaces the process environment as the overlay source when given
    fn load(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?;
        settings.try_deserialize()
    }

    /// The front-end origin, which must be able to take a `/trips/{id}` path
    pub fn get_web_base_url(&self) -> Result<Url, config::ConfigError> {
        let url = Url::parse(&self.web_base_url).map_err(|e| {
            config::ConfigError::Message(format!(
                "invalid web_base_url {}: {e}",
                self.web_base_url
            ))
        })?;
        if url.cannot_be_a_base() || url.fragment().is_some() {
            return Err(config::ConfigError::Message(format!(
                "web_base_url {} cannot be extended with a trip path",
                self.web_base_url
            )));
        }
        Ok(url)
    }

    pub fn get_max_workers(&self) -> usize {
        self.max_workers.unwrap_or_else(num_cpus::get)
    }

    pub fn get_db_pool_max_size(&self) -> u32 {
        self.db_pool_max_size.unwrap_or(8)
    }

    pub fn get_db_pool_min_idle(&self) -> u32 {
        self.db_pool_min_idle.unwrap_or(2)
    }

    pub fn get_db_pool_timeout_seconds(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.db_pool_timeout_seconds.unwrap_or(30))
    }
}
