//! Overlap detection.
//!
//! Two events conflict when they fall on the same date and their half-open
//! `[start, end)` time intervals intersect. Back-to-back events, where one
//! ends exactly as the other begins, are allowed. Pure functions; the caller
//! decides what to do with a conflict.

use crate::models::event::Event;

/// Interval test on a single pair. Symmetric.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    a.date == b.date && a.start_time < b.end_time && a.end_time > b.start_time
}

/// Every event in `existing` that conflicts with `candidate`, in the order
/// they appear. When the candidate is a persisted record being edited, its
/// own id is skipped so an event never conflicts with itself.
pub fn find_overlapping_events(candidate: &Event, existing: &[Event]) -> Vec<Event> {
    existing
        .iter()
        .filter(|other| candidate.id.is_none() || other.id != candidate.id)
        .filter(|other| is_overlapping(candidate, other))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use test_case::test_case;

    fn event_at(date: (i32, u32, u32), start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            "Evt",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
        .unwrap()
    }

    const DAY: (i32, u32, u32) = (2025, 11, 25);

    #[test_case((10, 0), (11, 0), (10, 30), (11, 30), true; "partial overlap")]
    #[test_case((10, 0), (12, 0), (10, 30), (11, 0), true; "containment")]
    #[test_case((10, 0), (11, 0), (10, 0), (11, 0), true; "identical interval")]
    #[test_case((9, 0), (10, 0), (10, 0), (11, 0), false; "back to back")]
    #[test_case((9, 0), (9, 30), (10, 0), (11, 0), false; "disjoint")]
    fn test_interval_semantics(
        a_start: (u32, u32),
        a_end: (u32, u32),
        b_start: (u32, u32),
        b_end: (u32, u32),
        expected: bool,
    ) {
        let a = event_at(DAY, a_start, a_end);
        let b = event_at(DAY, b_start, b_end);
        assert_eq!(is_overlapping(&a, &b), expected);
        assert_eq!(is_overlapping(&b, &a), expected);
    }

    #[test]
    fn test_different_dates_never_overlap() {
        let a = event_at((2025, 11, 25), (10, 0), (11, 0));
        let b = event_at((2025, 11, 26), (10, 0), (11, 0));
        assert!(!is_overlapping(&a, &b));
        assert!(find_overlapping_events(&a, &[b]).is_empty());
    }

    #[test]
    fn test_returns_all_conflicts_in_input_order() {
        let candidate = event_at(DAY, (10, 0), (12, 0));
        let mut first = event_at(DAY, (9, 30), (10, 30));
        first.id = Some(1);
        first.title = "first".into();
        let mut clear = event_at(DAY, (8, 0), (9, 0));
        clear.id = Some(2);
        let mut second = event_at(DAY, (11, 30), (12, 30));
        second.id = Some(3);
        second.title = "second".into();

        let conflicts = find_overlapping_events(&candidate, &[first, clear, second]);
        let titles: Vec<_> = conflicts.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_editing_excludes_own_id() {
        let mut stored = event_at(DAY, (10, 0), (11, 0));
        stored.id = Some(7);

        let mut edited = stored.clone();
        edited.end_time = NaiveTime::from_hms_opt(11, 30, 0).unwrap();

        assert!(find_overlapping_events(&edited, std::slice::from_ref(&stored)).is_empty());

        // A draft with no id still sees the stored record.
        let mut draft = edited.clone();
        draft.id = None;
        assert_eq!(find_overlapping_events(&draft, &[stored]).len(), 1);
    }
}
