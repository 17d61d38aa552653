//! One-shot class planning from raw form input.
//!
//! Parses a [`ClassRequest`], runs both schedulers with shared settings,
//! and renders the next-session text with an injected [`Clock`].

use serde::{Deserialize, Serialize};

use super::{MissionScheduler, SessionScheduler};
use crate::clock::{Clock, SystemClock};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::formatting::describe_next_session;
use crate::models::{
    parse_start_date, Curriculum, Frequency, MissionSchedule, RecurrenceConfig, ScheduleTime,
    ScheduledSession, WeekdaySet,
};

/// Raw class setup input, as collected by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequest {
    /// Class display name.
    pub class_name: String,
    /// Start date (`YYYY-MM-DD` or a datetime).
    pub start_date: String,
    /// Weekday names.
    pub class_days: Vec<String>,
    /// `weekly`, `biweekly` or `monthly`.
    pub frequency: String,
    /// `HH:MM` or `h:mm AM/PM`.
    pub schedule_time: String,
}

impl ClassRequest {
    /// Creates a weekly request with no class days at 09:00.
    pub fn new(class_name: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            start_date: start_date.into(),
            class_days: Vec::new(),
            frequency: Frequency::Weekly.to_string(),
            schedule_time: ScheduleTime::default().to_string(),
        }
    }

    /// Adds a class day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.class_days.push(day.into());
        self
    }

    /// Sets the frequency.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the schedule time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.schedule_time = time.into();
        self
    }

    /// Parses the request into a recurrence config.
    ///
    /// # Errors
    /// `InvalidDate`, `InvalidWeekday`, `InvalidFrequency` or `InvalidTime`
    /// for the first malformed field.
    pub fn recurrence(&self) -> Result<RecurrenceConfig> {
        let start = parse_start_date(&self.start_date)?;
        let weekdays = WeekdaySet::parse_names(&self.class_days)?;
        let frequency: Frequency = self.frequency.parse()?;
        let time: ScheduleTime = self.schedule_time.parse()?;
        Ok(RecurrenceConfig::new(start)
            .with_weekdays(weekdays)
            .with_frequency(frequency)
            .with_time(time))
    }
}

/// Everything computed for a class at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPlan {
    /// Class display name.
    pub class_name: String,
    /// Parsed recurrence.
    pub recurrence: RecurrenceConfig,
    /// Sessions within the horizon.
    pub sessions: Vec<ScheduledSession>,
    /// Mission due dates.
    pub missions: MissionSchedule,
    /// "Next class" text.
    pub next_session: String,
}

/// Plans classes with shared scheduler settings and clock.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mission_schedule::clock::FixedClock;
/// use mission_schedule::models::Curriculum;
/// use mission_schedule::scheduler::{ClassPlanner, ClassRequest};
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let planner = ClassPlanner::new().with_clock(FixedClock(now));
/// let request = ClassRequest::new("Room 4", "2024-01-01")
///     .with_day("Monday")
///     .with_time("9:00 AM");
///
/// let plan = planner.plan(&request, &Curriculum::from_titles(["Intro", "Passwords"])).unwrap();
/// assert_eq!(plan.missions.len(), 2);
/// assert_eq!(plan.next_session, "Today");
/// ```
#[derive(Debug, Clone)]
pub struct ClassPlanner<C = SystemClock> {
    config: SchedulerConfig,
    clock: C,
}

impl ClassPlanner<SystemClock> {
    /// Creates a planner with default settings and the system clock.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for ClassPlanner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ClassPlanner<C> {
    /// Replaces the clock.
    pub fn with_clock<K: Clock>(self, clock: K) -> ClassPlanner<K> {
        ClassPlanner {
            config: self.config,
            clock,
        }
    }

    /// Replaces the scheduler settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Scheduler settings in use.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Plans a class from raw input.
    pub fn plan(&self, request: &ClassRequest, curriculum: &Curriculum) -> Result<ClassPlan> {
        let recurrence = request.recurrence()?;
        self.plan_recurrence(&request.class_name, recurrence, curriculum)
    }

    /// Plans a class from an already-parsed recurrence.
    pub fn plan_recurrence(
        &self,
        class_name: &str,
        recurrence: RecurrenceConfig,
        curriculum: &Curriculum,
    ) -> Result<ClassPlan> {
        self.config.validate()?;

        let missions =
            MissionScheduler::from_config(&self.config).schedule(&recurrence, curriculum)?;
        let sessions = SessionScheduler::from_config(&self.config).compute(&recurrence)?;
        let next_session = describe_next_session(
            recurrence.weekdays(),
            recurrence.frequency(),
            &sessions,
            self.clock.now(),
        );

        tracing::debug!(
            "Planned class '{}': {} sessions, {} missions, next: {}",
            class_name,
            sessions.len(),
            missions.len(),
            next_session
        );

        Ok(ClassPlan {
            class_name: class_name.to_string(),
            recurrence,
            sessions,
            missions,
            next_session,
        })
    }
}
