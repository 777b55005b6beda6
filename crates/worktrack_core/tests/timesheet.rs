use chrono::{NaiveDate, NaiveTime};
use std::cell::Cell;
use worktrack_core::gateway::{GatewayError, GatewayResult, SimulatedGateway, TimesheetGateway};
use worktrack_core::model::timesheet::{ActivityType, TimeEntry, TimesheetValidationError};
use worktrack_core::seed::{demo_period_entries, demo_time_entries};
use worktrack_core::service::timesheet_service::{
    NewEntryRequest, SavePeriodRequest, TimesheetError, TimesheetService, DEFAULT_HISTORY_DAYS,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn seeded() -> TimesheetService<SimulatedGateway> {
    let mut entries = demo_time_entries();
    entries.extend(demo_period_entries(day(14)));
    TimesheetService::with_entries(SimulatedGateway::instant(), entries)
}

fn entry(date: NaiveDate, hours: f64, description: &str) -> NewEntryRequest {
    NewEntryRequest {
        date,
        hours,
        activity: ActivityType::Teaching,
        description: description.to_string(),
    }
}

#[test]
fn new_entries_are_listed_first_for_their_day() {
    let mut service = seeded();
    let added = service
        .add_entry(entry(day(14), 1.5, "Lab supervision"))
        .unwrap()
        .id;

    let entries = service.entries_for(day(14));
    assert_eq!(entries[0].id, added);
    assert_eq!(service.entries()[0].id, added);
}

#[test]
fn hours_outside_range_or_off_half_steps_are_rejected() {
    let mut service = TimesheetService::new(SimulatedGateway::instant());
    for hours in [0.0, 0.25, 12.5, 1.3, f64::NAN] {
        let err = service.add_entry(entry(day(1), hours, "work")).unwrap_err();
        assert!(matches!(err, TimesheetError::Validation(_)), "hours={hours}");
    }
    let err = service.add_entry(entry(day(1), 2.0, "  ")).unwrap_err();
    assert!(matches!(
        err,
        TimesheetError::Validation(TimesheetValidationError::BlankDescription)
    ));
    assert!(service.entries().is_empty());
}

#[test]
fn day_total_counts_period_durations() {
    let service = seeded();
    // 3 + 2 + 3 free hours plus three 50-minute periods.
    let expected = 8.0 + 3.0 * 50.0 / 60.0;
    assert!((service.total_hours_for(day(14)) - expected).abs() < 1e-9);
    assert!((service.total_hours_for(day(13)) - 7.5).abs() < 1e-9);
    assert_eq!(service.total_hours_for(day(1)), 0.0);
}

#[test]
fn history_is_newest_first_and_limited() {
    let mut service = seeded();
    service.add_entry(entry(day(10), 2.0, "Grading")).unwrap();

    let history = service.history(DEFAULT_HISTORY_DAYS);
    let dates: Vec<_> = history.iter().map(|summary| summary.date).collect();
    assert_eq!(dates, vec![day(14), day(13), day(10)]);
    assert_eq!(history[0].activity_count, 6);

    assert_eq!(service.history(1).len(), 1);
}

#[test]
fn saving_a_period_twice_updates_the_same_entry() {
    let mut service = seeded();
    let request = SavePeriodRequest {
        date: day(14),
        period_id: 3,
        start: time(10, 20),
        end: time(11, 20),
        activity: Some(ActivityType::Administrative),
        description: "Timetable meeting".to_string(),
    };
    let first_id = service.save_period(request.clone()).unwrap().unwrap().id;

    let second = service
        .save_period(SavePeriodRequest {
            activity: Some(ActivityType::Research),
            description: "Paper revision".to_string(),
            ..request
        })
        .unwrap()
        .unwrap();
    assert_eq!(second.id, first_id);
    assert_eq!(second.activity, ActivityType::Research);

    let matching = service
        .entries_for(day(14))
        .into_iter()
        .filter(|entry| entry.period_id() == Some(3))
        .count();
    assert_eq!(matching, 1);
    assert_eq!(service.period(3).unwrap().end, time(11, 20));
}

#[test]
fn reversed_period_window_changes_nothing() {
    let mut service = seeded();
    let before = *service.period(1).unwrap();
    let err = service
        .save_period(SavePeriodRequest {
            date: day(14),
            period_id: 1,
            start: time(9, 20),
            end: time(8, 30),
            activity: Some(ActivityType::Teaching),
            description: String::new(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        TimesheetError::Validation(TimesheetValidationError::InvalidPeriodWindow { .. })
    ));
    assert_eq!(*service.period(1).unwrap(), before);
}

#[test]
fn time_only_update_creates_no_entry() {
    let mut service = TimesheetService::new(SimulatedGateway::instant());
    let saved = service
        .save_period(SavePeriodRequest {
            date: day(14),
            period_id: 8,
            start: time(15, 30),
            end: time(16, 30),
            activity: None,
            description: String::new(),
        })
        .unwrap();
    assert!(saved.is_none());
    assert!(service.entry_for_period(day(14), 8).is_none());
    assert!((service.period(8).unwrap().duration_hours() - 1.0).abs() < 1e-9);

    let err = service
        .save_period(SavePeriodRequest {
            date: day(14),
            period_id: 9,
            start: time(16, 30),
            end: time(17, 0),
            activity: None,
            description: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, TimesheetError::PeriodNotFound(9)));
}

#[derive(Default)]
struct UnsavedGateway {
    attempts: Cell<usize>,
}

impl TimesheetGateway for UnsavedGateway {
    fn save_entry(&self, _entry: &TimeEntry) -> GatewayResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(GatewayError::Unavailable("timesheet server offline".to_string()))
    }
}

#[test]
fn gateway_failure_keeps_entries_and_period_times() {
    let mut entries = demo_time_entries();
    entries.extend(demo_period_entries(day(14)));
    let mut service = TimesheetService::with_entries(UnsavedGateway::default(), entries);
    let entries_before = service.entries().to_vec();
    let period_before = *service.period(2).unwrap();

    let err = service.add_entry(entry(day(15), 2.0, "Exam duty")).unwrap_err();
    assert!(matches!(err, TimesheetError::Gateway(_)));

    let err = service
        .save_period(SavePeriodRequest {
            date: day(14),
            period_id: 2,
            start: time(9, 30),
            end: time(10, 30),
            activity: Some(ActivityType::Administrative),
            description: "Board meeting".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TimesheetError::Gateway(_)));

    assert_eq!(service.entries(), entries_before.as_slice());
    assert_eq!(*service.period(2).unwrap(), period_before);
    assert_eq!(service.gateway().attempts.get(), 2);
}
