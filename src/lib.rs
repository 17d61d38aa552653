//! Recurring class scheduling for mission-based curricula.
//!
//! Given a class start date, selected weekdays, a frequency (weekly,
//! biweekly or monthly) and a time of day, computes the dates on which
//! curriculum missions fall due and the concrete class sessions within a
//! planning horizon.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `RecurrenceConfig`, `WeekdaySet`,
//!   `Frequency`, `ScheduleTime`, `Curriculum`, `MissionSchedule`,
//!   `ScheduledSession`, and calendar arithmetic
//! - **`scheduler`**: `MissionScheduler`, `SessionScheduler`, `ClassPlanner`
//!   and `ScheduleSummary`
//! - **`formatting`**: "Next class" and recurrence text
//! - **`validation`**: Input checks before a class is persisted
//! - **`config`**: Scheduler settings loaded from TOML
//! - **`clock`**: Injectable current time
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use mission_schedule::models::{Curriculum, RecurrenceConfig};
//! use mission_schedule::scheduler::{compute_mission_schedule, compute_sessions};
//!
//! let config = RecurrenceConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .with_weekday(Weekday::Mon);
//! let curriculum = Curriculum::from_titles(["Intro", "Passwords"]);
//!
//! assert_eq!(compute_mission_schedule(&config, &curriculum).unwrap().len(), 2);
//! assert_eq!(compute_sessions(&config).unwrap().len(), 18);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, Result, ScheduleError};
