use chrono::{Datelike, NaiveDate};

use crate::models::event::Event;

/// Generation stops at the rule's end date or the ceiling, whichever is
/// earlier; an open-ended rule is bounded by the ceiling alone.
pub(super) fn effective_end(end_date: Option<NaiveDate>, ceiling: NaiveDate) -> NaiveDate {
    match end_date {
        Some(end) => end.min(ceiling),
        None => ceiling,
    }
}

/// Clone of the template dated at one concrete occurrence. Each result is an
/// independent draft sharing every other template field, repeat descriptor
/// included.
pub(super) fn occurrence_on(template: &Event, date: NaiveDate) -> Event {
    let mut occurrence = template.clone();
    occurrence.id = None;
    occurrence.date = date;
    occurrence
}

/// Target (year, month) after advancing `months` months, carrying into the
/// year as needed.
pub(super) fn add_months(date: NaiveDate, months: u32) -> (i32, u32) {
    let zero_based = date.month0() as i64 + months as i64;
    let year = date.year() as i64 + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    (year as i32, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_effective_end_prefers_earlier_bound() {
        assert_eq!(
            effective_end(Some(d(2026, 3, 1)), d(2025, 12, 31)),
            d(2025, 12, 31)
        );
        assert_eq!(
            effective_end(Some(d(2025, 6, 1)), d(2025, 12, 31)),
            d(2025, 6, 1)
        );
        assert_eq!(effective_end(None, d(2025, 12, 31)), d(2025, 12, 31));
    }

    #[test]
    fn test_add_months_carries_years() {
        assert_eq!(add_months(d(2025, 11, 25), 1), (2025, 12));
        assert_eq!(add_months(d(2025, 11, 25), 2), (2026, 1));
        assert_eq!(add_months(d(2025, 1, 31), 25), (2027, 2));
    }
}
