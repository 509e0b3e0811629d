use chrono::{Duration, NaiveDate};

/// Every `interval` days from `start` through `end`, inclusive. The start
/// date itself is always emitted, even when it already lies past `end`.
pub(super) fn generate(start: NaiveDate, interval: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let step = Duration::days(interval as i64);
    let mut dates = vec![start];
    let mut current = start + step;

    while current <= end {
        dates.push(current);
        current += step;
    }

    dates
}
