//! Scheduler configuration.
//!
//! TOML-based; every field has a default, so an empty document is valid.
//!
//! ```toml
//! horizon_months = 4
//! max_cycles = 100
//! monthly_anchor = "first_session"
//! session_days = "first_qualifying_day"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default session horizon, in calendar months from the start date.
pub const DEFAULT_HORIZON_MONTHS: u32 = 4;

/// Default cap on walked cycles before mission scheduling gives up.
pub const DEFAULT_MAX_CYCLES: u32 = 100;

/// How monthly sessions pick their weekday and base date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyAnchor {
    /// Occurrence *k* is `first + k months`, aligned to the first session's weekday.
    #[default]
    FirstSession,
    /// Each occurrence steps one month from the previous session and aligns
    /// to its weekday. Day-of-month drifts later over time.
    PreviousSession,
}

/// Which selected weekdays produce sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionDays {
    /// Only the first qualifying weekday after the start date recurs.
    #[default]
    FirstQualifyingDay,
    /// Every selected weekday in each active cycle, matching mission assignment.
    EverySelectedDay,
}

/// Scheduler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Session horizon in calendar months.
    pub horizon_months: u32,
    /// Cycle cap for mission scheduling.
    pub max_cycles: u32,
    /// Monthly session anchoring.
    pub monthly_anchor: MonthlyAnchor,
    /// Multi-weekday session handling.
    pub session_days: SessionDays,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            max_cycles: DEFAULT_MAX_CYCLES,
            monthly_anchor: MonthlyAnchor::default(),
            session_days: SessionDays::default(),
        }
    }
}

impl SchedulerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        tracing::debug!("Loading scheduler config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the schedulers cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.horizon_months == 0 {
            return Err(ConfigError::InvalidValue {
                field: "horizon_months".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_cycles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_cycles".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Sets the session horizon.
    pub fn with_horizon_months(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    /// Sets the cycle cap.
    pub fn with_max_cycles(mut self, cycles: u32) -> Self {
        self.max_cycles = cycles;
        self
    }

    /// Sets monthly anchoring.
    pub fn with_monthly_anchor(mut self, anchor: MonthlyAnchor) -> Self {
        self.monthly_anchor = anchor;
        self
    }

    /// Sets multi-weekday session handling.
    pub fn with_session_days(mut self, days: SessionDays) -> Self {
        self.session_days = days;
        self
    }
}
