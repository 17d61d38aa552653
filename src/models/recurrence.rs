//! Recurrence settings for a class.
//!
//! A [`RecurrenceConfig`] is the immutable input of one scheduling run:
//! start date, class weekdays, frequency, and the wall-clock time applied
//! to every generated date.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// How often a class meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every week.
    #[default]
    Weekly,
    /// Every other week.
    Biweekly,
    /// Once a month.
    Monthly,
}

impl Frequency {
    /// Whether the given cycle (week index within the current block) is an
    /// assignment week.
    ///
    /// For monthly, `cycle` counts weeks within the current month block.
    #[inline]
    pub fn is_active_cycle(self, cycle: u32) -> bool {
        match self {
            Self::Weekly => true,
            Self::Biweekly => cycle % 2 == 0,
            Self::Monthly => cycle == 0,
        }
    }

    /// Suffix appended to human-readable schedule text.
    pub fn display_suffix(self) -> &'static str {
        match self {
            Self::Weekly => "",
            Self::Biweekly => " (Every 2 weeks)",
            Self::Monthly => " (Monthly)",
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ScheduleError::InvalidFrequency(s.to_string())),
        }
    }
}

/// An unordered set of weekdays.
///
/// Stored as a bitmask; iteration runs Sunday → Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_sunday()
    }

    /// Adds a weekday. Returns `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.bits |= Self::bit(day);
        !present
    }

    /// Adds a weekday (builder form).
    pub fn with(mut self, day: Weekday) -> Self {
        self.insert(day);
        self
    }

    /// Whether `day` is selected.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & Self::bit(day) != 0
    }

    /// Whether no weekday is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of selected weekdays.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Selected weekdays, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST.iter().copied().filter(|d| self.contains(*d))
    }

    /// Parses weekday names (`"Monday"`, `"mon"`, ...).
    pub fn parse_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|n| parse_weekday(n.as_ref()))
            .collect()
    }
}

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

/// Parses a weekday name, full or abbreviated, case-insensitive.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| ScheduleError::InvalidWeekday(name.to_string()))
}

/// Wall-clock time applied to every generated date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleTime {
    hour: u32,
    minute: u32,
}

impl ScheduleTime {
    /// Creates a time from 24-hour components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour (0–23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// As a chrono time.
    pub fn to_naive_time(self) -> NaiveTime {
        // Components are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Attaches this time to a date.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }

    /// 12-hour rendering, e.g. `9:05 AM`.
    pub fn to_12h_string(self) -> String {
        self.to_naive_time().format("%-I:%M %p").to_string()
    }
}

impl Default for ScheduleTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ScheduleTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&upper, "%I:%M %p"))
            .or_else(|_| NaiveTime::parse_from_str(&upper, "%I:%M%p"))
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))?;
        Self::new(time.hour(), time.minute())
    }
}

impl TryFrom<String> for ScheduleTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ScheduleTime> for String {
    fn from(time: ScheduleTime) -> Self {
        time.to_string()
    }
}

/// Parses a start date, reducing datetimes to their calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 (`2024-01-01T23:30:00-05:00`, local date
/// kept), and `YYYY-MM-DDTHH:MM` form input.
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScheduleError::InvalidDate {
            input: input.to_string(),
            reason: "empty".into(),
        });
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local().date());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.date())
        .map_err(|e| ScheduleError::InvalidDate {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Input of one scheduling run.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use mission_schedule::models::{Frequency, RecurrenceConfig, ScheduleTime};
///
/// let config = RecurrenceConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .with_weekday(Weekday::Mon)
///     .with_frequency(Frequency::Biweekly)
///     .with_time(ScheduleTime::new(9, 0).unwrap());
/// assert!(config.weekdays().contains(Weekday::Mon));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceConfig {
    start_date: NaiveDate,
    weekdays: WeekdaySet,
    frequency: Frequency,
    schedule_time: ScheduleTime,
}

impl RecurrenceConfig {
    /// Creates a weekly config with no weekdays selected, at the default time.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            weekdays: WeekdaySet::new(),
            frequency: Frequency::Weekly,
            schedule_time: ScheduleTime::default(),
        }
    }

    /// Uses the calendar date of a datetime as the start date.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self::new(start.date())
    }

    /// Adds a class weekday.
    pub fn with_weekday(mut self, day: Weekday) -> Self {
        self.weekdays.insert(day);
        self
    }

    /// Replaces the weekday set.
    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// Sets the frequency.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the time applied to every generated date.
    pub fn with_time(mut self, time: ScheduleTime) -> Self {
        self.schedule_time = time;
        self
    }

    /// Start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Selected weekdays.
    pub fn weekdays(&self) -> &WeekdaySet {
        &self.weekdays
    }

    /// Frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Schedule time.
    pub fn schedule_time(&self) -> ScheduleTime {
        self.schedule_time
    }

    /// Whether `date` is a qualifying day on or after the start date.
    pub fn qualifies(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.weekdays.contains(date.weekday())
    }
}
