//! Runtime configuration for the task board front-end.
//!
//! Values come from defaults, preset constructors, or `TASKBOARD_*`
//! environment variables.

use crate::board::{
    adapters::ids::{RandomTaskIdGenerator, SequentialTaskIdGenerator},
    ports::TaskIdGenerator,
};
use std::sync::Arc;
use thiserror::Error;

/// Environment variable selecting the identifier strategy.
pub const ID_STRATEGY_ENV: &str = "TASKBOARD_ID_STRATEGY";
/// Environment variable holding the default log filter.
pub const LOG_FILTER_ENV: &str = "TASKBOARD_LOG";
/// Environment variable toggling the ALL TASKS section.
pub const SHOW_AUDIT_ENV: &str = "TASKBOARD_SHOW_AUDIT";

/// How fresh task identifiers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Random,
    /// Counter-backed identifiers starting at 1.
    Sequential,
}

impl IdStrategy {
    /// Builds the generator for this strategy.
    #[must_use]
    pub fn generator(self) -> Arc<dyn TaskIdGenerator> {
        match self {
            Self::Random => Arc::new(RandomTaskIdGenerator),
            Self::Sequential => Arc::new(SequentialTaskIdGenerator::new()),
        }
    }
}

impl TryFrom<&str> for IdStrategy {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" | "uuid" => Ok(Self::Random),
            "sequential" | "counter" => Ok(Self::Sequential),
            _ => Err(ConfigError::InvalidIdStrategy(value.to_owned())),
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The identifier strategy is not recognised.
    #[error("unknown id strategy '{0}', expected random or sequential")]
    InvalidIdStrategy(String),

    /// A boolean setting holds something other than a boolean.
    #[error("invalid value '{value}' for {key}, expected true or false")]
    InvalidFlag {
        /// Setting name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Task board configuration.
///
/// # Examples
///
/// ```
/// use taskboard::config::{BoardConfig, IdStrategy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.id_strategy, IdStrategy::Random);
/// assert!(config.show_audit_list);
///
/// let deterministic = BoardConfig::deterministic();
/// assert_eq!(deterministic.id_strategy, IdStrategy::Sequential);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Identifier strategy for new tasks.
    pub id_strategy: IdStrategy,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Whether the ALL TASKS audit list is rendered.
    pub show_audit_list: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Random,
            log_filter: "taskboard=info".to_owned(),
            show_audit_list: true,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with reproducible identifiers.
    ///
    /// Useful for demos and scripted sessions.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            ..Default::default()
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(strategy) = lookup(ID_STRATEGY_ENV) {
            config.id_strategy = IdStrategy::try_from(strategy.as_str())?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|value| !value.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(flag) = lookup(SHOW_AUDIT_ENV) {
            config.show_audit_list = parse_flag(SHOW_AUDIT_ENV, &flag)?;
        }
        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}
