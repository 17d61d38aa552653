//! Scheduling domain models.
//!
//! Provides the input and output types of a scheduling run.
//!
//! # Domain Mappings
//!
//! | mission-schedule | Class setup form | Persisted record |
//! |------------------|------------------|------------------|
//! | RecurrenceConfig | start date, class days, frequency, time | class document |
//! | Curriculum | (fixed catalog) | mission list |
//! | ScheduledSession | "next class" display | session list |
//! | ScheduledMission | mission due date | class mission entry |

pub mod calendar;
mod mission;
mod recurrence;
mod schedule;

pub use mission::{Curriculum, Mission};
pub use recurrence::{
    parse_start_date, parse_weekday, Frequency, RecurrenceConfig, ScheduleTime, WeekdaySet,
};
pub use schedule::{MissionSchedule, ScheduledMission, ScheduledSession};
