//! Application configuration.

use std::path::Path;

use rapport_agents::{AgentConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_VARIANTS};
use serde::{Deserialize, Serialize};

/// Maximum message variants per request
pub const MAX_VARIANTS: usize = 5;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language model settings
    pub agent: AgentConfig,

    /// Outreach generation settings
    pub generation: GenerationConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Message variants per request (1-5)
    pub variants: usize,

    /// Cached drafts kept in memory. Zero disables the cache.
    pub cache_capacity: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variants: DEFAULT_VARIANTS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Ok(config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?))
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("RAPPORT")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from file, then environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?.add_source(Self::environment()).build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let agent = &self.agent;

        if agent.model.trim().is_empty() {
            return Err(config::ConfigError::Message("agent.model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&agent.temperature) {
            return Err(config::ConfigError::Message(format!(
                "agent.temperature must be within 0.0-2.0, got {}",
                agent.temperature
            )));
        }
        if !(agent.top_p > 0.0 && agent.top_p <= 1.0) {
            return Err(config::ConfigError::Message(format!(
                "agent.top_p must be within (0.0, 1.0], got {}",
                agent.top_p
            )));
        }
        if agent.timeout_ms == 0 {
            return Err(config::ConfigError::Message("agent.timeout_ms must be positive".to_string()));
        }
        if !(1..=MAX_VARIANTS).contains(&self.generation.variants) {
            return Err(config::ConfigError::Message(format!(
                "generation.variants must be within 1-{}, got {}",
                MAX_VARIANTS, self.generation.variants
            )));
        }

        Ok(())
    }
}
