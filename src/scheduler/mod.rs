//! Class schedulers and schedule summaries.
//!
//! # Algorithm
//!
//! Both schedulers are built on [`CycleWalker`], which walks calendar
//! cycles (weeks) from the week containing the first qualifying day and
//! yields every selected weekday in an active cycle. Weekly classes are
//! active every cycle and biweekly classes every other cycle. Monthly
//! classes advance in blocks of four cycles, re-anchored to the same
//! week-of-month in each following month.
//!
//! - [`MissionScheduler`] assigns the curriculum in order, one mission per
//!   qualifying day, up to a cycle cap.
//! - [`SessionScheduler`] lists concrete session dates up to a horizon.
//! - [`ClassPlanner`] runs both from raw form input.
//!
//! # Summary
//!
//! [`ScheduleSummary`] reports span, gaps and missions past the horizon.

mod cycle;
mod missions;
mod planner;
mod sessions;
mod summary;

pub use cycle::{CycleWalker, StopReason, CYCLES_PER_MONTH_BLOCK};
pub use missions::MissionScheduler;
pub use planner::{ClassPlan, ClassPlanner, ClassRequest};
pub use sessions::SessionScheduler;
pub use summary::ScheduleSummary;

use crate::error::Result;
use crate::models::{Curriculum, MissionSchedule, RecurrenceConfig, ScheduledSession};

/// Sessions for `config` with default settings.
pub fn compute_sessions(config: &RecurrenceConfig) -> Result<Vec<ScheduledSession>> {
    SessionScheduler::new().compute(config)
}

/// Mission due dates for `curriculum` with default settings.
pub fn compute_mission_schedule(
    config: &RecurrenceConfig,
    curriculum: &Curriculum,
) -> Result<MissionSchedule> {
    MissionScheduler::new().schedule(config, curriculum)
}
