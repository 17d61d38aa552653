//! Horizon-bounded session generation.
//!
//! # Algorithm
//!
//! 1. `end = start + horizon_months` (calendar months, end-of-month clamped).
//! 2. `first` = first qualifying day in `start ..= start + 6`.
//! 3. Weekly / biweekly: step 7 / 14 days from `first` while `<= end`.
//! 4. Monthly: step one calendar month and align forward 0–6 days to the
//!    anchor weekday; stop once the aligned date passes `end`
//!    (see [`MonthlyAnchor`]).
//! 5. Attach the schedule time.
//!
//! With [`SessionDays::FirstQualifyingDay`] only `first`'s weekday recurs.
//! [`SessionDays::EverySelectedDay`] instead emits every selected weekday of
//! each active cycle, using the same walk as mission assignment.

use chrono::{Datelike, NaiveDate};

use super::cycle::CycleWalker;
use crate::config::{MonthlyAnchor, SchedulerConfig, SessionDays};
use crate::error::{Result, ScheduleError};
use crate::models::calendar;
use crate::models::{Frequency, RecurrenceConfig, ScheduledSession, WeekdaySet};

/// Generates the class session list up to a fixed horizon.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use mission_schedule::models::{Frequency, RecurrenceConfig};
/// use mission_schedule::scheduler::SessionScheduler;
///
/// let config = RecurrenceConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .with_weekday(Weekday::Mon)
///     .with_frequency(Frequency::Weekly);
///
/// let sessions = SessionScheduler::new().compute(&config).unwrap();
/// assert_eq!(sessions.first().unwrap().date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// // Four months of Mondays
/// assert_eq!(sessions.len(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct SessionScheduler {
    horizon_months: u32,
    monthly_anchor: MonthlyAnchor,
    session_days: SessionDays,
}

impl SessionScheduler {
    /// Creates a scheduler with default settings.
    pub fn new() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }

    /// Creates a scheduler from configuration.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            horizon_months: config.horizon_months,
            monthly_anchor: config.monthly_anchor,
            session_days: config.session_days,
        }
    }

    /// Sets the horizon in calendar months.
    pub fn with_horizon_months(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    /// Sets monthly anchoring.
    pub fn with_monthly_anchor(mut self, anchor: MonthlyAnchor) -> Self {
        self.monthly_anchor = anchor;
        self
    }

    /// Sets multi-weekday handling.
    pub fn with_session_days(mut self, days: SessionDays) -> Self {
        self.session_days = days;
        self
    }

    /// Last date (inclusive) sessions may fall on.
    pub fn horizon_end(&self, start: NaiveDate) -> Result<NaiveDate> {
        calendar::add_months(start, self.horizon_months)
            .ok_or(ScheduleError::DateOutOfRange(start))
    }

    /// Computes sessions in chronological order.
    ///
    /// An empty weekday set yields an empty list.
    pub fn compute(&self, config: &RecurrenceConfig) -> Result<Vec<ScheduledSession>> {
        let start = config.start_date();
        if config.weekdays().is_empty() {
            tracing::debug!("No class days selected; no sessions for {}", start);
            return Ok(Vec::new());
        }
        let end = self.horizon_end(start)?;
        let Some(first) = calendar::next_qualifying_day(start, config.weekdays()) else {
            return Ok(Vec::new());
        };

        let dates = match (self.session_days, config.frequency()) {
            (SessionDays::EverySelectedDay, _) => walk_until(config, *config.weekdays(), end),
            (SessionDays::FirstQualifyingDay, Frequency::Monthly) => {
                self.monthly_dates(first, end)?
            }
            (SessionDays::FirstQualifyingDay, _) => {
                let anchor_day = WeekdaySet::new().with(first.weekday());
                walk_until(config, anchor_day, end)
            }
        };

        let time = config.schedule_time();
        let sessions: Vec<ScheduledSession> = dates
            .into_iter()
            .map(|date| ScheduledSession::new(date, time))
            .collect();

        tracing::debug!(
            "Computed {} {} sessions between {} and {}",
            sessions.len(),
            config.frequency(),
            start,
            end
        );
        Ok(sessions)
    }

    /// Monthly occurrences of `first` up to `end`.
    fn monthly_dates(&self, first: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        let target = first.weekday();
        let mut dates = Vec::new();
        if first <= end {
            dates.push(first);
        }

        let mut months: u32 = 1;
        loop {
            let (base, step) = match self.monthly_anchor {
                MonthlyAnchor::FirstSession => (first, months),
                MonthlyAnchor::PreviousSession => (*dates.last().unwrap_or(&first), 1),
            };
            let advanced =
                calendar::add_months(base, step).ok_or(ScheduleError::DateOutOfRange(base))?;
            if advanced > end {
                break;
            }
            let aligned = calendar::align_forward(advanced, target)
                .ok_or(ScheduleError::DateOutOfRange(advanced))?;
            if aligned > end {
                break;
            }
            dates.push(aligned);
            months += 1;
        }
        Ok(dates)
    }
}

impl Default for SessionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Qualifying days of `weekdays` in active cycles, up to `end`.
fn walk_until(config: &RecurrenceConfig, weekdays: WeekdaySet, end: NaiveDate) -> Vec<NaiveDate> {
    CycleWalker::for_weekdays(config, weekdays)
        .take_while(|d| *d <= end)
        .collect()
}
