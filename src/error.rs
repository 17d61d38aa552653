//! Error types for scheduling and configuration.
//!
//! Scheduling is pure computation, so every failure is returned as a value.
//! An empty weekday selection is *not* an error: both schedulers return an
//! empty sequence and [`validate_class_input`](crate::validation::validate_class_input)
//! reports it for callers that must refuse to persist such a class.

use thiserror::Error;

/// Errors produced while parsing input or computing a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The cycle cap was reached before every mission received a date.
    #[error(
        "scheduling overrun: assigned {scheduled} of {required} missions within {max_cycles} cycles"
    )]
    SchedulingOverrun {
        /// Missions that had been assigned when the cap was hit.
        scheduled: usize,
        /// Curriculum length.
        required: usize,
        /// Cycle cap in effect.
        max_cycles: u32,
    },

    /// Start date could not be parsed.
    #[error("invalid start date '{input}': {reason}")]
    InvalidDate {
        /// Raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Schedule time could not be parsed or is out of range.
    #[error("invalid schedule time '{0}' (expected HH:MM or h:mm AM/PM)")]
    InvalidTime(String),

    /// Unknown weekday name.
    #[error("invalid weekday '{0}'")]
    InvalidWeekday(String),

    /// Unknown frequency name.
    #[error("invalid frequency '{0}' (expected weekly, biweekly or monthly)")]
    InvalidFrequency(String),

    /// Calendar arithmetic left the representable date range.
    #[error("date arithmetic out of range starting from {0}")]
    DateOutOfRange(chrono::NaiveDate),

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file not found.
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config TOML: {0}")]
    ParseError(String),

    /// Failed to serialize config.
    #[error("failed to serialize config: {0}")]
    SerializeError(String),

    /// I/O error reading config.
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerializeError(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias using [`ScheduleError`].
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
