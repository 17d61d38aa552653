//! Cycle walk over qualifying days.
//!
//! # Algorithm
//!
//! 1. Find the first qualifying day on or after the start date and take the
//!    Sunday that begins its week as the week anchor.
//! 2. Walk cycles (weeks) `0, 1, 2, ...` from the anchor. A cycle is active
//!    per [`Frequency::is_active_cycle`].
//! 3. In an active cycle, yield each day of the week whose weekday is
//!    selected and which is not before the start date.
//! 4. Monthly: after 4 cycles the anchor jumps to the same week-of-month in
//!    the next calendar month and the cycle counter resets.
//!
//! Days come out strictly increasing. The walk ends when the cycle counter
//! reaches the cap or calendar arithmetic overflows;
//! [`CycleWalker::stop_reason`] tells the two apart. The cap applies to the
//! counter after any monthly reset, so a monthly walk with a cap above
//! [`CYCLES_PER_MONTH_BLOCK`] is bounded only by its consumer.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{self, DAYS_PER_WEEK};
use crate::models::{Frequency, RecurrenceConfig, WeekdaySet};

/// Cycles per monthly block before the anchor jumps to the next month.
pub const CYCLES_PER_MONTH_BLOCK: u32 = 4;

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No weekday selected.
    NoQualifyingDays,
    /// Cycle cap reached.
    CycleLimit,
    /// Calendar arithmetic left chrono's range.
    DateOverflow,
}

/// Iterator over qualifying days in active cycles.
#[derive(Debug, Clone)]
pub struct CycleWalker {
    start: NaiveDate,
    weekdays: WeekdaySet,
    frequency: Frequency,
    week_anchor: NaiveDate,
    cycle: u32,
    block: u32,
    offset: u64,
    cycles_walked: u32,
    max_cycles: Option<u32>,
    stopped: Option<StopReason>,
}

impl CycleWalker {
    /// Walks the qualifying days of `config` without a cycle cap.
    ///
    /// Callers must bound the walk themselves (e.g. with `take_while`).
    pub fn new(config: &RecurrenceConfig) -> Self {
        Self::for_weekdays(config, *config.weekdays())
    }

    /// Walks `config` using a different weekday set.
    pub fn for_weekdays(config: &RecurrenceConfig, weekdays: WeekdaySet) -> Self {
        let start = config.start_date();
        let (week_anchor, stopped) = match calendar::next_qualifying_day(start, &weekdays) {
            Some(first) => (calendar::start_of_week(first), None),
            None => (start, Some(StopReason::NoQualifyingDays)),
        };
        Self {
            start,
            weekdays,
            frequency: config.frequency(),
            week_anchor,
            cycle: 0,
            block: 0,
            offset: 0,
            cycles_walked: 0,
            max_cycles: None,
            stopped,
        }
    }

    /// Caps the cycle counter. A cap of 0 yields nothing.
    pub fn with_max_cycles(mut self, max_cycles: u32) -> Self {
        self.max_cycles = Some(max_cycles);
        if max_cycles == 0 && self.stopped.is_none() {
            self.stopped = Some(StopReason::CycleLimit);
        }
        self
    }

    /// Weeks fully walked so far, across monthly blocks.
    pub fn cycles_walked(&self) -> u32 {
        self.cycles_walked
    }

    /// Why the walk ended, if it has.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Moves to the next cycle. Returns `false` when the walk must stop.
    fn finish_cycle(&mut self) -> bool {
        self.offset = 0;
        self.cycle += 1;
        self.cycles_walked += 1;

        if self.frequency == Frequency::Monthly && self.cycle == CYCLES_PER_MONTH_BLOCK {
            self.block += 1;
            self.cycle = 0;
            match calendar::week_of_month_anchor(self.start, self.block) {
                Some(anchor) => self.week_anchor = anchor,
                None => {
                    self.stopped = Some(StopReason::DateOverflow);
                    return false;
                }
            }
        }

        if let Some(max) = self.max_cycles {
            if self.cycle >= max {
                self.stopped = Some(StopReason::CycleLimit);
                return false;
            }
        }
        true
    }
}

impl Iterator for CycleWalker {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            if self.stopped.is_some() {
                return None;
            }
            if self.offset >= DAYS_PER_WEEK {
                if !self.finish_cycle() {
                    return None;
                }
                continue;
            }
            if self.offset == 0 && !self.frequency.is_active_cycle(self.cycle) {
                self.offset = DAYS_PER_WEEK;
                continue;
            }

            let days = u64::from(self.cycle) * DAYS_PER_WEEK + self.offset;
            self.offset += 1;
            let Some(day) = calendar::add_days(self.week_anchor, days) else {
                self.stopped = Some(StopReason::DateOverflow);
                return None;
            };
            if day >= self.start && self.weekdays.contains(day.weekday()) {
                return Some(day);
            }
        }
    }
}

impl std::iter::FusedIterator for CycleWalker {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn config(start: NaiveDate, days: &[Weekday], frequency: Frequency) -> RecurrenceConfig {
        RecurrenceConfig::new(start)
            .with_weekdays(days.iter().copied().collect())
            .with_frequency(frequency)
    }

    #[test]
    fn test_weekly_single_day() {
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Weekly);
        let days: Vec<NaiveDate> = CycleWalker::new(&c).take(3).collect();
        assert_eq!(days, vec![d(2024, 1, 1), d(2024, 1, 8), d(2024, 1, 15)]);
    }

    #[test]
    fn test_biweekly_skips_alternate_weeks() {
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Biweekly);
        let days: Vec<NaiveDate> = CycleWalker::new(&c).take(3).collect();
        assert_eq!(days, vec![d(2024, 1, 1), d(2024, 1, 15), d(2024, 1, 29)]);
    }

    #[test]
    fn test_multiple_days_per_week() {
        // Start Wednesday; Monday of the first week is before the start
        let c = config(d(2024, 1, 3), &[Weekday::Mon, Weekday::Fri], Frequency::Weekly);
        let days: Vec<NaiveDate> = CycleWalker::new(&c).take(4).collect();
        assert_eq!(
            days,
            vec![d(2024, 1, 5), d(2024, 1, 8), d(2024, 1, 12), d(2024, 1, 15)]
        );
    }

    #[test]
    fn test_monthly_same_week_of_month() {
        // 2024-01-01 → week-of-month 0; one Monday per month block
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Monthly);
        let days: Vec<NaiveDate> = CycleWalker::new(&c).take(3).collect();
        // Feb: first Sunday 4th → Mon 5th; Mar: first Sunday 3rd → Mon 4th
        assert_eq!(days, vec![d(2024, 1, 1), d(2024, 2, 5), d(2024, 3, 4)]);
    }

    #[test]
    fn test_monthly_mid_month_start() {
        // 2024-01-17 (Wed) → week-of-month 2
        let c = config(d(2024, 1, 17), &[Weekday::Thu], Frequency::Monthly);
        let days: Vec<NaiveDate> = CycleWalker::new(&c).take(2).collect();
        // Feb: first Sunday 4th + 2 weeks = 18th → Thu 22nd
        assert_eq!(days, vec![d(2024, 1, 18), d(2024, 2, 22)]);
    }

    #[test]
    fn test_cycle_limit() {
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Weekly);
        let mut walker = CycleWalker::new(&c).with_max_cycles(3);
        let days: Vec<NaiveDate> = walker.by_ref().collect();
        assert_eq!(days.len(), 3);
        assert_eq!(walker.stop_reason(), Some(StopReason::CycleLimit));
        assert_eq!(walker.cycles_walked(), 3);
    }

    #[test]
    fn test_monthly_cap_applies_within_block() {
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Monthly);

        // Counter resets every block, so a cap of 4 never trips
        let days: Vec<NaiveDate> = CycleWalker::new(&c).with_max_cycles(4).take(30).collect();
        assert_eq!(days.len(), 30);
        assert!(walker_cycles(&c, 4, 30) > 100);

        // A cap below the block length stops after the first block
        let mut walker = CycleWalker::new(&c).with_max_cycles(3);
        let days: Vec<NaiveDate> = walker.by_ref().collect();
        assert_eq!(days, vec![d(2024, 1, 1)]);
        assert_eq!(walker.stop_reason(), Some(StopReason::CycleLimit));
    }

    fn walker_cycles(c: &RecurrenceConfig, max: u32, n: usize) -> u32 {
        let mut walker = CycleWalker::new(c).with_max_cycles(max);
        walker.by_ref().take(n).for_each(drop);
        walker.cycles_walked()
    }

    #[test]
    fn test_zero_cap_yields_nothing() {
        let c = config(d(2024, 1, 1), &[Weekday::Mon], Frequency::Weekly);
        let mut walker = CycleWalker::new(&c).with_max_cycles(0);
        assert_eq!(walker.next(), None);
        assert_eq!(walker.stop_reason(), Some(StopReason::CycleLimit));
        assert_eq!(walker.cycles_walked(), 0);
    }

    #[test]
    fn test_empty_weekdays() {
        let c = config(d(2024, 1, 1), &[], Frequency::Weekly);
        let mut walker = CycleWalker::new(&c);
        assert_eq!(walker.next(), None);
        assert_eq!(walker.stop_reason(), Some(StopReason::NoQualifyingDays));
    }
}
