use chrono::{Duration, NaiveDate};

/// Every `interval` weeks from `start` through `end`, inclusive. Weekly
/// repetition is plain day arithmetic, so the weekday never drifts.
pub(super) fn generate(start: NaiveDate, interval: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let step = Duration::days(interval as i64 * 7);
    let mut dates = vec![start];
    let mut current = start + step;

    while current <= end {
        dates.push(current);
        current += step;
    }

    dates
}
