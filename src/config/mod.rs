#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Commands};

/// Effective settings after command-line overrides are applied to the file.
#[derive(Debug, Clone)]
pub struct Settings {
    file: TomlConfig,
    rates_endpoint: Option<String>,
    timeout_seconds: Option<u64>,
}

impl Settings {
    pub fn new(file: TomlConfig) -> Self {
        Self {
            file,
            rates_endpoint: None,
            timeout_seconds: None,
        }
    }

    pub fn with_rates_endpoint(mut self, endpoint: Option<String>) -> Self {
        if endpoint.is_some() {
            self.rates_endpoint = endpoint;
        }
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        if seconds.is_some() {
            self.timeout_seconds = seconds;
        }
        self
    }

    /// Merged view as a TOML config, so one validator covers both sources.
    fn effective(&self) -> TomlConfig {
        let mut merged = self.file.clone();
        if let Some(endpoint) = &self.rates_endpoint {
            merged.currency.endpoint = endpoint.clone();
        }
        if self.timeout_seconds.is_some() {
            merged.currency.timeout_seconds = self.timeout_seconds;
        }
        merged
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        Ok(Settings::new(file)
            .with_rates_endpoint(self.rates_endpoint.clone())
            .with_timeout_seconds(self.timeout_seconds))
    }
}

impl ConfigProvider for Settings {
    fn rates_endpoint(&self) -> &str {
        self.rates_endpoint
            .as_deref()
            .unwrap_or_else(|| self.file.rates_endpoint())
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .map(Duration::from_secs)
            .or_else(|| self.file.request_timeout())
    }

    fn log_level(&self) -> Option<&str> {
        self.file.log_level()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.effective().validate()
    }
}
