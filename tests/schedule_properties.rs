//! Randomized checks over many generated class configurations.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use mission_schedule::config::{MonthlyAnchor, SchedulerConfig, SessionDays};
use mission_schedule::models::calendar;
use mission_schedule::models::{Curriculum, Frequency, RecurrenceConfig, ScheduleTime, WeekdaySet};
use mission_schedule::scheduler::{MissionScheduler, ScheduleSummary, SessionScheduler};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const FREQUENCIES: [Frequency; 3] = [Frequency::Weekly, Frequency::Biweekly, Frequency::Monthly];

fn random_config(rng: &mut SmallRng) -> RecurrenceConfig {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let start = base
        .checked_add_days(Days::new(rng.random_range(0..1200)))
        .unwrap();

    let mut weekdays = WeekdaySet::new();
    while weekdays.is_empty() {
        for day in ALL_DAYS {
            if rng.random_bool(0.3) {
                weekdays.insert(day);
            }
        }
    }

    let frequency = FREQUENCIES[rng.random_range(0..FREQUENCIES.len())];
    let time = ScheduleTime::new(rng.random_range(6..21), rng.random_range(0..60)).unwrap();

    RecurrenceConfig::new(start)
        .with_weekdays(weekdays)
        .with_frequency(frequency)
        .with_time(time)
}

fn curriculum(n: usize) -> Curriculum {
    Curriculum::from_titles((1..=n).map(|i| format!("Mission {i}")))
}

#[test]
fn test_mission_schedule_properties() {
    let mut rng = SmallRng::seed_from_u64(42);
    let scheduler = MissionScheduler::new();

    for _ in 0..300 {
        let config = random_config(&mut rng);
        // Biweekly with one weekday fits 50 missions in the default cap
        let n = rng.random_range(1..=40);
        let schedule = scheduler.schedule(&config, &curriculum(n)).unwrap();

        assert_eq!(schedule.len(), n, "{config:?}");
        assert!(schedule.is_chronological());

        let days: Vec<NaiveDate> = schedule.iter().map(|m| m.due_day()).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]), "{config:?}");
        for (i, mission) in schedule.iter().enumerate() {
            assert_eq!(mission.mission_id, format!("mission-{}", i + 1));
            assert!(config.qualifies(mission.due_day()), "{config:?}");
            assert_eq!(mission.due_date.time(), config.schedule_time().to_naive_time());
        }

        assert_eq!(scheduler.schedule(&config, &curriculum(n)).unwrap(), schedule);
    }
}

#[test]
fn test_session_properties() {
    let mut rng = SmallRng::seed_from_u64(7);
    let scheduler = SessionScheduler::new();

    for _ in 0..300 {
        let config = random_config(&mut rng);
        let sessions = scheduler.compute(&config).unwrap();
        let start = config.start_date();
        let end = calendar::add_months(start, 4).unwrap();

        assert!(!sessions.is_empty(), "{config:?}");
        let days: Vec<NaiveDate> = sessions.iter().map(|s| s.date()).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]), "{config:?}");
        assert!(days.iter().all(|d| *d >= start && *d <= end), "{config:?}");

        // Only the first qualifying weekday recurs
        let first = days[0];
        assert!(days.iter().all(|d| d.weekday() == first.weekday()));
        assert_eq!(calendar::next_qualifying_day(start, config.weekdays()), Some(first));

        let step = match config.frequency() {
            Frequency::Weekly => Some(7),
            Frequency::Biweekly => Some(14),
            Frequency::Monthly => None,
        };
        if let Some(step) = step {
            assert!(days.windows(2).all(|w| (w[1] - w[0]).num_days() == step));
        }

        assert_eq!(scheduler.compute(&config).unwrap(), sessions);
    }
}

#[test]
fn test_every_selected_day_sessions_match_missions() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let config = SchedulerConfig::default().with_session_days(SessionDays::EverySelectedDay);
    let sessions = SessionScheduler::from_config(&config);
    let missions = MissionScheduler::from_config(&config);

    for _ in 0..100 {
        let recurrence = random_config(&mut rng);
        let computed = sessions.compute(&recurrence).unwrap();
        let session_days: Vec<NaiveDate> = computed.iter().map(|s| s.date()).collect();
        let start = recurrence.start_date();
        let end = calendar::add_months(start, 4).unwrap();

        assert!(!session_days.is_empty(), "{recurrence:?}");
        assert!(session_days.windows(2).all(|w| w[0] < w[1]), "{recurrence:?}");
        for day in &session_days {
            assert!(*day >= start && *day <= end, "{recurrence:?}");
            assert!(recurrence.weekdays().contains(day.weekday()), "{recurrence:?}");
        }
        assert_eq!(sessions.compute(&recurrence).unwrap(), computed);

        let schedule = missions.schedule(&recurrence, &curriculum(5)).unwrap();

        // Missions inside the horizon land on session days
        for mission in schedule.iter() {
            if mission.due_day() <= *session_days.last().unwrap() {
                assert!(session_days.contains(&mission.due_day()), "{recurrence:?}");
            }
        }
    }
}

#[test]
fn test_monthly_previous_session_steps_about_a_month() {
    let mut rng = SmallRng::seed_from_u64(99);
    let pinned = SessionScheduler::new().with_monthly_anchor(MonthlyAnchor::FirstSession);
    let chained = SessionScheduler::new().with_monthly_anchor(MonthlyAnchor::PreviousSession);

    for _ in 0..200 {
        let config = random_config(&mut rng).with_frequency(Frequency::Monthly);
        let a = pinned.compute(&config).unwrap();
        let b = chained.compute(&config).unwrap();

        assert_eq!(a.first(), b.first());
        let weekday = b[0].weekday();
        for w in b.windows(2) {
            let gap = (w[1].date() - w[0].date()).num_days();
            assert!((28..=37).contains(&gap), "{config:?}");
            assert_eq!(w[1].weekday(), weekday);
        }
    }
}

#[test]
fn test_summary_counts_agree() {
    let mut rng = SmallRng::seed_from_u64(5);

    for _ in 0..100 {
        let config = random_config(&mut rng);
        let n = rng.random_range(1..=25);
        let schedule = MissionScheduler::new().schedule(&config, &curriculum(n)).unwrap();
        let sessions = SessionScheduler::new().compute(&config).unwrap();
        let summary = ScheduleSummary::calculate(&config, &sessions, &schedule, 4);

        assert_eq!(summary.mission_count, n);
        assert_eq!(summary.missions_by_weekday.values().sum::<usize>(), n);
        assert!(summary.missions_beyond_horizon <= n);
        assert!(summary.span_days >= 0);
    }
}
