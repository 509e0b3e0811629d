use chrono::{Datelike, NaiveDate};

use super::utils::add_months;

/// Every `interval` months from `start` through `end`, preserving the
/// original day-of-month. Months too short for that day (the 31st in a
/// 30-day month, Feb 30th and so on) are skipped outright, not clamped.
pub(super) fn generate(start: NaiveDate, interval: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let day = start.day();
    let mut dates = vec![start];
    let mut months = interval;

    loop {
        let (year, month) = add_months(start, months);
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first_of_month) if first_of_month <= end => {}
            _ => break,
        }

        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate > end {
                break;
            }
            dates.push(candidate);
        }

        months += interval;
    }

    dates
}
