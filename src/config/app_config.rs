use serde::Deserialize;

use crate::domain::allocation::DEFAULT_ACCESSIBLE_FACILITY;
use crate::domain::{AllocationOptions, AllocationStrategy};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seating: SeatingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Defaults for allocation runs; command-line flags take precedence
#[derive(Debug, Clone, Deserialize)]
pub struct SeatingConfig {
    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_accessible_facility")]
    pub accessible_facility: String,
    #[serde(default)]
    pub honor_special_requirements: bool,
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            accessible_facility: default_accessible_facility(),
            honor_special_requirements: false,
            pretty_output: default_pretty_output(),
        }
    }
}

impl SeatingConfig {
    /// Allocation options described by this configuration
    pub fn allocation_options(&self) -> AllocationOptions {
        let strategy = if self.honor_special_requirements {
            AllocationStrategy::SpecialRequirements {
                facility: self.accessible_facility.clone(),
            }
        } else {
            AllocationStrategy::Standard
        };

        let options = AllocationOptions::new().with_strategy(strategy);
        match self.seed {
            Some(seed) => options.with_seed(seed),
            None => options,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_accessible_facility() -> String {
    DEFAULT_ACCESSIBLE_FACILITY.to_string()
}

fn default_pretty_output() -> bool {
    true
}
