//! Calendar arithmetic helpers.
//!
//! All scheduling runs on [`NaiveDate`] calendar dates. Time of day is only
//! attached at the very end, so daylight-saving transitions and timezone
//! offsets cannot move a session to a neighbouring day.
//!
//! # Week convention
//! Weeks begin on Sunday.
//!
//! # Month arithmetic
//! Adding months clamps to the end of the target month
//! (`2024-01-31 + 1 month = 2024-02-29`).

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use super::WeekdaySet;

/// Days in a week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Adds `months` calendar months, clamping to the end of the month.
///
/// Returns `None` if the result leaves chrono's supported range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Adds `days` days.
#[inline]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// The Sunday that begins the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// First date `>= from` that falls on `target`.
pub fn align_forward(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let from_w = i64::from(from.weekday().num_days_from_sunday());
    let tgt_w = i64::from(target.num_days_from_sunday());
    let delta = (7 + tgt_w - from_w) % 7;
    add_days(from, delta as u64)
}

/// First date in `from ..= from + 6` whose weekday is in `weekdays`.
///
/// Returns `None` for an empty set.
pub fn next_qualifying_day(from: NaiveDate, weekdays: &WeekdaySet) -> Option<NaiveDate> {
    (0..DAYS_PER_WEEK)
        .filter_map(|offset| add_days(from, offset))
        .find(|d| weekdays.contains(d.weekday()))
}

/// First occurrence of `weekday` in the month that contains `date`.
pub fn first_weekday_of_month(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    align_forward(first, weekday)
}

/// Anchor week for month block `block` of a monthly cycle walk.
///
/// The first Sunday of `start`'s month advanced by `block` months, offset by
/// `floor(start.day / 7)` weeks so each block lands on the same week-of-month
/// as the start date.
pub fn week_of_month_anchor(start: NaiveDate, block: u32) -> Option<NaiveDate> {
    let month = add_months(start.with_day(1)?, block)?;
    let sunday = first_weekday_of_month(month, Weekday::Sun)?;
    let weeks = u64::from(start.day() / 7);
    add_days(sunday, weeks * DAYS_PER_WEEK)
}
