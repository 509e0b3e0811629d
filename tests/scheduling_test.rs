// Integration tests for the scheduling engine
// Exercises the full flow against a real SQLite store: persistence,
// conflict-checked saves, recurrence expansion, series operations, and
// notification windows.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;

use calendar_core::models::event::Event;
use calendar_core::models::notification::NotificationOffset;
use calendar_core::models::repeat::{RepeatRule, RepeatType};
use calendar_core::services::event::{EventService, SaveOutcome};
use calendar_core::services::notification::due_notifications;
use calendar_core::services::recurrence::default_expansion_ceiling;
use calendar_core::services::series;
use calendar_core::services::store::{EventStore, SqliteStore};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn load_fixture_events() -> Vec<Event> {
    serde_json::from_str(include_str!("fixtures/events.json")).unwrap()
}

#[test]
fn test_fixture_events_deserialize_and_persist() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();

    let drafts = load_fixture_events();
    assert_eq!(drafts.len(), 3);
    for draft in drafts {
        let created = store.create_event(draft).unwrap();
        assert!(created.id.is_some());
    }

    let listed = store.list_events().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].title, "Team Standup");
    assert_eq!(listed[0].notification, NotificationOffset::TenMinutes);
    assert_eq!(listed[1].title, "Dentist");
    assert_eq!(listed[2].repeat.repeat_type, RepeatType::Weekly);
}

#[test]
fn test_conflict_checked_save_then_forced_save() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();
    let mut service = EventService::new(&mut store);

    let existing = Event::new("Existing Meeting", d(2025, 11, 25), hm(10, 0), hm(11, 0)).unwrap();
    service.save(&existing).unwrap();

    let clashing = Event::new("New Meeting", d(2025, 11, 25), hm(10, 30), hm(11, 30)).unwrap();
    let outcome = service.save_checked(&clashing).unwrap();
    let conflicts = match outcome {
        SaveOutcome::Conflicts(conflicts) => conflicts,
        SaveOutcome::Saved(_) => panic!("overlapping draft saved without confirmation"),
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].title, "Existing Meeting");

    // User confirms through the dialog: the plain save ignores conflicts.
    service.save(&clashing).unwrap();
    assert_eq!(store.list_events().unwrap().len(), 2);
}

#[test]
fn test_repeating_template_persists_independent_rows() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();
    let mut service = EventService::new(&mut store);

    let template = Event::builder()
        .title("Daily Workout")
        .date(d(2025, 11, 25))
        .start_time(hm(7, 0))
        .end_time(hm(8, 0))
        .repeat(RepeatRule::new(RepeatType::Daily, 1, Some(d(2025, 11, 30))))
        .build()
        .unwrap();

    let (created, report) = service
        .create_repeating(&template, default_expansion_ceiling())
        .unwrap();
    assert_eq!(created.len(), 6);
    assert!(!report.is_partial());

    let listed = store.list_events().unwrap();
    let dates: Vec<_> = listed.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![
            d(2025, 11, 25),
            d(2025, 11, 26),
            d(2025, 11, 27),
            d(2025, 11, 28),
            d(2025, 11, 29),
            d(2025, 11, 30),
        ]
    );
    // Each row keeps the shared descriptor so the series can be regrouped.
    assert!(listed.iter().all(|e| e.repeat == template.repeat));
}

#[test]
fn test_series_edit_all_and_single_detach() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();

    let template = Event::builder()
        .title("Evening Reading")
        .date(d(2025, 11, 25))
        .start_time(hm(21, 0))
        .end_time(hm(22, 0))
        .repeat(RepeatRule::new(RepeatType::Daily, 1, Some(d(2025, 11, 28))))
        .build()
        .unwrap();
    {
        let mut service = EventService::new(&mut store);
        service
            .create_repeating(&template, default_expansion_ceiling())
            .unwrap();
    }

    // Group edit renames every member without touching dates.
    let members = store.list_events().unwrap();
    let patch = series::EventPatch {
        title: Some("Night Reading".into()),
        ..Default::default()
    };
    let report = series::edit_all(&mut store, &members[0], &patch).unwrap();
    assert_eq!(report.applied.len(), 4);
    assert!(!report.is_partial());

    let renamed = store.list_events().unwrap();
    assert!(renamed.iter().all(|e| e.title == "Night Reading"));
    assert!(renamed.iter().all(|e| e.repeat.is_repeating()));

    // Single edit detaches that occurrence from the series.
    let solo_patch = series::EventPatch {
        location: Some("Library".into()),
        ..Default::default()
    };
    let detached = series::edit_single(&mut store, &renamed[1], &solo_patch).unwrap();
    assert_eq!(detached.repeat, RepeatRule::none());

    let after = store.list_events().unwrap();
    let remaining = series::find_series_members(&after[0], &after);
    assert_eq!(remaining.len(), 3);
}

#[test]
fn test_series_move_all_shifts_by_day_offset() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();

    let template = Event::builder()
        .title("Weekly Review")
        .date(d(2025, 11, 3))
        .start_time(hm(16, 0))
        .end_time(hm(17, 0))
        .repeat(RepeatRule::new(RepeatType::Weekly, 1, Some(d(2025, 11, 24))))
        .build()
        .unwrap();
    {
        let mut service = EventService::new(&mut store);
        service
            .create_repeating(&template, default_expansion_ceiling())
            .unwrap();
    }

    // Drag the second occurrence (Nov 10) forward two days.
    let members = store.list_events().unwrap();
    assert_eq!(members.len(), 4);
    let report = series::move_all(&mut store, &members[1], d(2025, 11, 12)).unwrap();
    assert!(!report.is_partial());

    let moved = store.list_events().unwrap();
    let dates: Vec<_> = moved.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![d(2025, 11, 5), d(2025, 11, 12), d(2025, 11, 19), d(2025, 11, 26)]
    );
    // The shared descriptor survives the move, group stays intact.
    assert_eq!(series::find_series_members(&moved[0], &moved).len(), 4);
}

#[test]
fn test_series_delete_all_empties_the_group() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();

    let template = Event::builder()
        .title("Sprint Planning")
        .date(d(2025, 11, 3))
        .start_time(hm(10, 0))
        .end_time(hm(11, 0))
        .repeat(RepeatRule::new(RepeatType::Weekly, 2, Some(d(2025, 12, 1))))
        .build()
        .unwrap();
    let one_off = Event::new("Lunch", d(2025, 11, 3), hm(12, 0), hm(13, 0)).unwrap();

    {
        let mut service = EventService::new(&mut store);
        service
            .create_repeating(&template, default_expansion_ceiling())
            .unwrap();
        service.save(&one_off).unwrap();
    }

    let members = store.list_events().unwrap();
    let reference = members.iter().find(|e| e.title == "Sprint Planning").unwrap();
    let report = series::delete_all(&mut store, reference).unwrap();
    assert!(!report.is_partial());

    let remaining = store.list_events().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Lunch");
}

#[test]
fn test_notification_window_fires_once_per_event() {
    init_logging();
    let mut store = SqliteStore::open_in_memory().unwrap();
    for draft in load_fixture_events() {
        store.create_event(draft).unwrap();
    }
    let events = store.list_events().unwrap();

    // 08:51 on the 25th: inside the standup's 10-minute window, outside the
    // dentist's one-hour window (13:00 start of window is later that day).
    let now = d(2025, 11, 25).and_time(hm(8, 51));
    let notified = HashSet::new();
    let (due, notified) = due_notifications(now, &events, &notified);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].message, "Team Standup starts in 10 minutes");

    // Same tick re-run: already-notified ids are suppressed.
    let (again, _) = due_notifications(now, &events, &notified);
    assert!(again.is_empty());

    // 13:30 is inside the dentist's window.
    let later = d(2025, 11, 25).and_time(hm(13, 30));
    let (afternoon, _) = due_notifications(later, &events, &notified);
    assert_eq!(afternoon.len(), 1);
    assert_eq!(afternoon[0].message, "Dentist starts in 1 hour");
}

#[test]
fn test_events_survive_reopen_on_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.db");
    let path = path.to_str().unwrap();

    {
        let mut store = SqliteStore::open(path).unwrap();
        let event = Event::builder()
            .title("Persisted Meeting")
            .description("survives reopen")
            .date(d(2025, 11, 25))
            .start_time(hm(10, 0))
            .end_time(hm(11, 0))
            .notification(NotificationOffset::OneDay)
            .build()
            .unwrap();
        store.create_event(event).unwrap();
    }

    let store = SqliteStore::open(path).unwrap();
    let listed = store.list_events().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Persisted Meeting");
    assert_eq!(listed[0].description.as_deref(), Some("survives reopen"));
    assert_eq!(listed[0].notification, NotificationOffset::OneDay);
}
