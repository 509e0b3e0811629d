//! Event search.
//!
//! Term filtering over title, description, and location, intersected with
//! the date window of the calendar view the user is looking at. Pure;
//! preserves input order.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::{is_date_in_range, month_range, week_range};

/// Which calendar view bounds the search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Week,
    Month,
}

fn matches_term(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&event.title)
        || event.description.as_deref().map_or(false, |d| contains(d))
        || event.location.as_deref().map_or(false, |l| contains(l))
}

/// Events matching the search term (case-insensitive) that fall inside the
/// current view's window: the Sunday-start week containing `current_date`,
/// or its calendar month. An empty term matches everything in the window.
pub fn search_events(
    events: &[Event],
    term: &str,
    current_date: NaiveDate,
    view: ViewKind,
) -> Vec<Event> {
    let (start, end) = match view {
        ViewKind::Week => week_range(current_date),
        ViewKind::Month => month_range(current_date),
    };
    let needle = term.trim().to_lowercase();

    events
        .iter()
        .filter(|event| is_date_in_range(event.date, start, end))
        .filter(|event| matches_term(event, &needle))
        .cloned()
        .collect()
}
