//! Schedule (output) models.
//!
//! A [`MissionSchedule`] pairs every curriculum entry with one qualifying
//! date; a [`ScheduledSession`] is a single class meeting. Both are
//! computed once per run and persisted by the caller.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use super::{Mission, ScheduleTime};

/// A concrete date and time at which the class meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Session start.
    pub starts_at: NaiveDateTime,
}

impl ScheduledSession {
    /// Creates a session at `date` + `time`.
    pub fn new(date: NaiveDate, time: ScheduleTime) -> Self {
        Self {
            starts_at: time.on(date),
        }
    }

    /// Calendar date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }

    /// Day of week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.starts_at.weekday()
    }
}

/// A curriculum entry paired with its due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMission {
    /// Catalog identifier of the mission.
    pub mission_id: String,
    /// Mission title.
    pub mission_name: String,
    /// Due date with the class time applied.
    pub due_date: NaiveDateTime,
    /// Class time as `HH:MM`.
    pub schedule_time: String,
}

impl ScheduledMission {
    /// Schedules `mission` on `date` at `time`.
    pub fn new(mission: &Mission, date: NaiveDate, time: ScheduleTime) -> Self {
        Self {
            mission_id: mission.id.clone(),
            mission_name: mission.title.clone(),
            due_date: time.on(date),
            schedule_time: time.to_string(),
        }
    }

    /// Calendar date of the due date.
    #[inline]
    pub fn due_day(&self) -> NaiveDate {
        self.due_date.date()
    }
}

/// Ordered mission assignments for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionSchedule {
    missions: Vec<ScheduledMission>,
}

impl MissionSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule, sorting by due date.
    ///
    /// The sort is stable, so missions due at the same instant keep
    /// curriculum order.
    pub fn from_assignments(mut missions: Vec<ScheduledMission>) -> Self {
        missions.sort_by_key(|m| m.due_date);
        Self { missions }
    }

    /// Number of scheduled missions.
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Assignments in due-date order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledMission> {
        self.missions.iter()
    }

    /// Assignments as a slice.
    pub fn as_slice(&self) -> &[ScheduledMission] {
        &self.missions
    }

    /// Consumes the schedule.
    pub fn into_vec(self) -> Vec<ScheduledMission> {
        self.missions
    }

    /// Earliest due date.
    pub fn first_due(&self) -> Option<NaiveDateTime> {
        self.missions.first().map(|m| m.due_date)
    }

    /// Latest due date.
    pub fn last_due(&self) -> Option<NaiveDateTime> {
        self.missions.last().map(|m| m.due_date)
    }

    /// Finds the assignment for a mission id.
    pub fn mission(&self, mission_id: &str) -> Option<&ScheduledMission> {
        self.missions.iter().find(|m| m.mission_id == mission_id)
    }

    /// Missions due on a calendar date.
    pub fn due_on(&self, date: NaiveDate) -> Vec<&ScheduledMission> {
        self.missions.iter().filter(|m| m.due_day() == date).collect()
    }

    /// First mission due on or after `now`.
    pub fn next_due(&self, now: NaiveDateTime) -> Option<&ScheduledMission> {
        self.missions.iter().find(|m| m.due_date >= now)
    }

    /// Whether due dates are non-decreasing.
    pub fn is_chronological(&self) -> bool {
        self.missions.windows(2).all(|w| w[0].due_date <= w[1].due_date)
    }
}

impl<'a> IntoIterator for &'a MissionSchedule {
    type Item = &'a ScheduledMission;
    type IntoIter = std::slice::Iter<'a, ScheduledMission>;

    fn into_iter(self) -> Self::IntoIter {
        self.missions.iter()
    }
}
