//! Human-readable schedule text.
//!
//! Comparisons against "now" are calendar-date based: a session earlier
//! today still reads as "Today".

use chrono::{Days, NaiveDateTime, Weekday};

use crate::models::{Frequency, RecurrenceConfig, ScheduledSession, WeekdaySet};

/// Text for classes with no days or no sessions.
pub const TBD: &str = "TBD";

/// Text when every session is in the past.
pub const NO_UPCOMING_SESSIONS: &str = "No upcoming sessions";

/// Describes the next upcoming session relative to `now`.
///
/// - `"TBD"` for an empty weekday set or session list
/// - `"No upcoming sessions"` if every session is before today
/// - `"Today"` / `"Tomorrow"` / `"Monday, January 8"` otherwise, followed by
///   `" (Every 2 weeks)"` or `" (Monthly)"` for non-weekly classes
///
/// # Example
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use mission_schedule::formatting::describe_next_session;
/// use mission_schedule::models::{Frequency, ScheduleTime, ScheduledSession, WeekdaySet};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let sessions = [ScheduledSession::new(day, ScheduleTime::new(9, 0).unwrap())];
/// let now = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let days = WeekdaySet::new().with(Weekday::Mon);
///
/// let text = describe_next_session(&days, Frequency::Biweekly, &sessions, now);
/// assert_eq!(text, "Monday, January 8 (Every 2 weeks)");
/// ```
pub fn describe_next_session(
    weekdays: &WeekdaySet,
    frequency: Frequency,
    sessions: &[ScheduledSession],
    now: NaiveDateTime,
) -> String {
    if weekdays.is_empty() || sessions.is_empty() {
        return TBD.to_string();
    }

    let today = now.date();
    let Some(next) = sessions.iter().find(|s| s.date() >= today) else {
        return NO_UPCOMING_SESSIONS.to_string();
    };

    let day = next.date();
    let label = if day == today {
        "Today".to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(day) {
        "Tomorrow".to_string()
    } else {
        day.format("%A, %B %-d").to_string()
    };
    format!("{label}{}", frequency.display_suffix())
}

/// Describes the recurrence itself, e.g. `"Mondays and Wednesdays at 9:00 AM (Every 2 weeks)"`.
///
/// Returns `"TBD"` when no weekday is selected.
pub fn describe_recurrence(config: &RecurrenceConfig) -> String {
    let names: Vec<&str> = config.weekdays().iter().map(plural_day_name).collect();
    let days = match names.as_slice() {
        [] => return TBD.to_string(),
        [one] => (*one).to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    };
    format!(
        "{days} at {}{}",
        config.schedule_time().to_12h_string(),
        config.frequency().display_suffix()
    )
}

fn plural_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mondays",
        Weekday::Tue => "Tuesdays",
        Weekday::Wed => "Wednesdays",
        Weekday::Thu => "Thursdays",
        Weekday::Fri => "Fridays",
        Weekday::Sat => "Saturdays",
        Weekday::Sun => "Sundays",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleTime;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate, h: u32) -> NaiveDateTime {
        date.and_hms_opt(h, 0, 0).unwrap()
    }

    fn session(date: NaiveDate) -> ScheduledSession {
        ScheduledSession::new(date, ScheduleTime::new(9, 0).unwrap())
    }

    fn mondays() -> WeekdaySet {
        WeekdaySet::new().with(Weekday::Mon)
    }

    #[test]
    fn test_today_without_suffix_for_weekly() {
        let sessions = [session(d(2024, 1, 8))];
        let now = at(d(2024, 1, 8), 7);
        let text = describe_next_session(&mondays(), Frequency::Weekly, &sessions, now);
        assert_eq!(text, "Today");
    }

    #[test]
    fn test_today_even_after_session_time() {
        let sessions = [session(d(2024, 1, 8)), session(d(2024, 1, 15))];
        let now = at(d(2024, 1, 8), 18);
        let text = describe_next_session(&mondays(), Frequency::Weekly, &sessions, now);
        assert_eq!(text, "Today");
    }

    #[test]
    fn test_tomorrow_with_suffix() {
        let sessions = [session(d(2024, 1, 8))];
        let now = at(d(2024, 1, 7), 20);
        assert_eq!(
            describe_next_session(&mondays(), Frequency::Monthly, &sessions, now),
            "Tomorrow (Monthly)"
        );
        assert_eq!(
            describe_next_session(&mondays(), Frequency::Biweekly, &sessions, now),
            "Tomorrow (Every 2 weeks)"
        );
    }

    #[test]
    fn test_future_date_format() {
        let sessions = [session(d(2024, 1, 1)), session(d(2024, 3, 4))];
        let now = at(d(2024, 2, 20), 9);
        let text = describe_next_session(&mondays(), Frequency::Weekly, &sessions, now);
        assert_eq!(text, "Monday, March 4");
    }

    #[test]
    fn test_tbd_and_past() {
        let sessions = [session(d(2024, 1, 8))];
        let now = at(d(2024, 1, 1), 9);
        assert_eq!(
            describe_next_session(&WeekdaySet::new(), Frequency::Weekly, &sessions, now),
            "TBD"
        );
        assert_eq!(
            describe_next_session(&mondays(), Frequency::Weekly, &[], now),
            "TBD"
        );
        let later = at(d(2024, 1, 9), 9);
        assert_eq!(
            describe_next_session(&mondays(), Frequency::Weekly, &sessions, later),
            "No upcoming sessions"
        );
    }

    #[test]
    fn test_describe_recurrence() {
        let time = ScheduleTime::new(9, 0).unwrap();
        let config = RecurrenceConfig::new(d(2024, 1, 1))
            .with_weekday(Weekday::Wed)
            .with_weekday(Weekday::Mon)
            .with_frequency(Frequency::Biweekly)
            .with_time(time);
        assert_eq!(
            describe_recurrence(&config),
            "Mondays and Wednesdays at 9:00 AM (Every 2 weeks)"
        );

        let config = config
            .with_weekday(Weekday::Fri)
            .with_frequency(Frequency::Weekly)
            .with_time(ScheduleTime::new(15, 45).unwrap());
        assert_eq!(
            describe_recurrence(&config),
            "Mondays, Wednesdays and Fridays at 3:45 PM"
        );

        assert_eq!(describe_recurrence(&RecurrenceConfig::new(d(2024, 1, 1))), "TBD");
    }
}
