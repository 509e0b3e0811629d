// Date utility functions
// Pure calendar arithmetic: week/month boundaries, grid layout, formatting

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::event::Event;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// The seven dates of the Sunday-start week containing `date`.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (0..7).map(|i| sunday + Duration::days(i)).collect()
}

/// First and last date of the Sunday-start week containing `date`.
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (sunday, sunday + Duration::days(6))
}

/// First and last date of the calendar month containing `date`.
pub fn month_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(date.day() as i64 - 1);
    let last_day = days_in_month(date.year(), date.month());
    (first, first + Duration::days(last_day as i64 - 1))
}

/// Month grid rows for the month containing `date`: one `[Option<u32>; 7]`
/// per week, `None` padding the cells before the first and after the last
/// day of the month.
pub fn weeks_of_month(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let (first, _) = month_range(date);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let total_days = days_in_month(date.year(), date.month());

    let mut cells: Vec<Option<u32>> = vec![None; leading];
    cells.extend((1..=total_days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells
        .chunks(7)
        .map(|chunk| {
            let mut week = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect()
}

/// Events falling on the given day-of-month, in input order.
pub fn events_for_day<'a>(events: &'a [Event], day: u32) -> Vec<&'a Event> {
    events.iter().filter(|e| e.date.day() == day).collect()
}

/// Inclusive range check.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

/// `YYYY-MM-DD`, the wire format for dates throughout the app.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Month heading, e.g. `November 2025`.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Week-of-month by the Thursday rule: the week belongs to whichever month
/// its Thursday falls in, numbered by that Thursday's position.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let thursday = thursday_of_week(date);
    thursday.day().div_ceil(7)
}

/// Week heading, e.g. `November 2025, Week 4`. Month and year are taken from
/// the week's Thursday so edge weeks land in the right month.
pub fn format_week(date: NaiveDate) -> String {
    let thursday = thursday_of_week(date);
    format!(
        "{}, Week {}",
        format_month(thursday),
        thursday.day().div_ceil(7)
    )
}

fn thursday_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 4 - date.weekday().num_days_from_sunday() as i64;
    date + Duration::days(offset)
}
