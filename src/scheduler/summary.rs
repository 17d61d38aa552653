//! Schedule summary metrics.
//!
//! Describes a computed class schedule for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Span | Days from first to last mission due date |
//! | Average gap | Mean days between consecutive missions |
//! | Past horizon | Missions due after the last generated session window |
//! | By weekday | Missions due on each weekday |

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::models::calendar;
use crate::models::{MissionSchedule, RecurrenceConfig, ScheduledSession};

/// Class schedule indicators.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Sessions generated within the horizon.
    pub session_count: usize,
    /// Missions with a due date.
    pub mission_count: usize,
    /// Earliest mission due date.
    pub first_due: Option<NaiveDateTime>,
    /// Latest mission due date.
    pub last_due: Option<NaiveDateTime>,
    /// Whole days from first to last due date.
    pub span_days: i64,
    /// Mean days between consecutive missions (0.0 with fewer than two).
    pub avg_gap_days: f64,
    /// Missions due after `start + horizon_months`.
    pub missions_beyond_horizon: usize,
    /// Mission count per weekday.
    pub missions_by_weekday: HashMap<Weekday, usize>,
}

impl ScheduleSummary {
    /// Computes the summary for one class.
    ///
    /// # Arguments
    /// * `config` - The class recurrence (for the start date).
    /// * `sessions` - Sessions from the session scheduler.
    /// * `missions` - Mission schedule for the same class.
    /// * `horizon_months` - Horizon the sessions were generated with.
    pub fn calculate(
        config: &RecurrenceConfig,
        sessions: &[ScheduledSession],
        missions: &MissionSchedule,
        horizon_months: u32,
    ) -> Self {
        let first_due = missions.first_due();
        let last_due = missions.last_due();

        let span_days = match (first_due, last_due) {
            (Some(first), Some(last)) => (last.date() - first.date()).num_days(),
            _ => 0,
        };

        let avg_gap_days = if missions.len() < 2 {
            0.0
        } else {
            span_days as f64 / (missions.len() - 1) as f64
        };

        let missions_beyond_horizon =
            match calendar::add_months(config.start_date(), horizon_months) {
                Some(end) => missions.iter().filter(|m| m.due_day() > end).count(),
                None => 0,
            };

        let mut missions_by_weekday: HashMap<Weekday, usize> = HashMap::new();
        for mission in missions.iter() {
            *missions_by_weekday.entry(mission.due_day().weekday()).or_insert(0) += 1;
        }

        Self {
            session_count: sessions.len(),
            mission_count: missions.len(),
            first_due,
            last_due,
            span_days,
            avg_gap_days,
            missions_beyond_horizon,
            missions_by_weekday,
        }
    }

    /// Whether every mission falls inside the session horizon.
    pub fn fits_horizon(&self) -> bool {
        self.missions_beyond_horizon == 0
    }
}
