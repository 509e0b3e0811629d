use chrono::{Datelike, NaiveDate};

/// Every `interval` years from `start` through `end`, preserving month and
/// day. A Feb 29 template skips non-leap years rather than rolling to
/// Feb 28 or Mar 1.
pub(super) fn generate(start: NaiveDate, interval: u32, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = vec![start];
    let mut years = interval as i32;

    loop {
        let year = start.year() + years;
        match NaiveDate::from_ymd_opt(year, start.month(), 1) {
            Some(first_of_month) if first_of_month <= end => {}
            _ => break,
        }

        if let Some(candidate) = NaiveDate::from_ymd_opt(year, start.month(), start.day()) {
            if candidate > end {
                break;
            }
            dates.push(candidate);
        }

        years += interval as i32;
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_plain_anniversary() {
        let dates = generate(d(2025, 11, 25), 1, d(2027, 12, 31));
        assert_eq!(dates, vec![d(2025, 11, 25), d(2026, 11, 25), d(2027, 11, 25)]);
    }

    #[test]
    fn test_leap_day_only_lands_on_leap_years() {
        let dates = generate(d(2024, 2, 29), 1, d(2032, 12, 31));
        assert_eq!(dates, vec![d(2024, 2, 29), d(2028, 2, 29), d(2032, 2, 29)]);
    }
}
