//! Curriculum assignment onto qualifying days.
//!
//! # Algorithm
//!
//! Walks cycles with [`CycleWalker`] and hands each qualifying day to the
//! next unassigned mission until the curriculum is exhausted. Several
//! selected weekdays in one active week consume several missions that
//! week. The walk is not bounded by the session horizon; it stops at the
//! curriculum length or when the cycle counter reaches the cap, whichever
//! comes first. The monthly counter resets every block, so monthly classes
//! only overrun with a cap below [`CYCLES_PER_MONTH_BLOCK`](super::CYCLES_PER_MONTH_BLOCK).
//!
//! # Complexity
//! O(c · 7 + n) for `c` walked cycles and `n` missions.

use super::cycle::{CycleWalker, StopReason};
use crate::config::{SchedulerConfig, DEFAULT_MAX_CYCLES};
use crate::error::{ConfigError, Result, ScheduleError};
use crate::models::{Curriculum, MissionSchedule, RecurrenceConfig, ScheduledMission};

/// Assigns every curriculum mission to one qualifying date.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use mission_schedule::models::{Curriculum, Frequency, RecurrenceConfig, ScheduleTime};
/// use mission_schedule::scheduler::MissionScheduler;
///
/// let config = RecurrenceConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .with_weekday(Weekday::Mon)
///     .with_frequency(Frequency::Biweekly)
///     .with_time(ScheduleTime::new(9, 0).unwrap());
/// let curriculum = Curriculum::from_titles(["Intro", "Passwords", "Sharing"]);
///
/// let schedule = MissionScheduler::new().schedule(&config, &curriculum).unwrap();
/// let days: Vec<String> = schedule.iter().map(|m| m.due_date.to_string()).collect();
/// assert_eq!(days, ["2024-01-01 09:00:00", "2024-01-15 09:00:00", "2024-01-29 09:00:00"]);
/// ```
#[derive(Debug, Clone)]
pub struct MissionScheduler {
    max_cycles: u32,
}

impl MissionScheduler {
    /// Creates a scheduler with the default cycle cap.
    pub fn new() -> Self {
        Self {
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }

    /// Creates a scheduler from configuration.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            max_cycles: config.max_cycles,
        }
    }

    /// Sets the cycle cap. A cap of 0 is rejected by [`schedule`](Self::schedule).
    pub fn with_max_cycles(mut self, max_cycles: u32) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Cycle cap in effect.
    pub fn max_cycles(&self) -> u32 {
        self.max_cycles
    }

    /// Schedules the curriculum.
    ///
    /// Returns an empty schedule when no weekday is selected or the
    /// curriculum is empty.
    ///
    /// # Errors
    /// - [`ScheduleError::SchedulingOverrun`] if the cycle cap is reached
    ///   before every mission has a date. No partial schedule is returned.
    /// - [`ConfigError::InvalidValue`] for a cap of 0.
    pub fn schedule(
        &self,
        config: &RecurrenceConfig,
        curriculum: &Curriculum,
    ) -> Result<MissionSchedule> {
        if self.max_cycles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_cycles".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if config.weekdays().is_empty() || curriculum.is_empty() {
            tracing::debug!(
                "Nothing to schedule ({} weekdays, {} missions)",
                config.weekdays().len(),
                curriculum.len()
            );
            return Ok(MissionSchedule::new());
        }

        let required = curriculum.len();
        let time = config.schedule_time();
        let mut walker = CycleWalker::new(config).with_max_cycles(self.max_cycles);

        let assignments: Vec<ScheduledMission> = curriculum
            .iter()
            .zip(walker.by_ref())
            .map(|(mission, day)| {
                tracing::trace!("Assigned '{}' to {}", mission.title, day);
                ScheduledMission::new(mission, day, time)
            })
            .collect();

        if assignments.len() < required {
            return Err(match walker.stop_reason() {
                Some(StopReason::DateOverflow) => {
                    ScheduleError::DateOutOfRange(config.start_date())
                }
                _ => {
                    tracing::warn!(
                        "Cycle cap of {} reached with {}/{} missions assigned",
                        self.max_cycles,
                        assignments.len(),
                        required
                    );
                    ScheduleError::SchedulingOverrun {
                        scheduled: assignments.len(),
                        required,
                        max_cycles: self.max_cycles,
                    }
                }
            });
        }

        tracing::debug!(
            "Scheduled {} missions over {} cycles",
            required,
            walker.cycles_walked() + 1
        );
        Ok(MissionSchedule::from_assignments(assignments))
    }
}

impl Default for MissionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
