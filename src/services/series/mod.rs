//! Recurring-group (series) operations.
//!
//! Occurrences produced by one expansion share their repeat descriptor,
//! title, and time range; membership is inferred from that structural
//! equality rather than an explicit series key, matching how the series was
//! created. Group edits and moves touch one record per store call,
//! sequentially and best-effort: a mid-batch persistence failure is recorded
//! in the returned [`BatchReport`] and the loop continues, leaving the
//! caller to reconcile by re-fetching the canonical set.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalendarError, Result};
use crate::models::category::Category;
use crate::models::event::{Event, EventId};
use crate::models::notification::NotificationOffset;
use crate::models::repeat::RepeatRule;
use crate::services::store::EventStore;

/// True when the two events belong to the same recurring series.
/// Dates differ by design; everything else that expansion stamped onto the
/// occurrences must match exactly.
pub fn same_series(a: &Event, b: &Event) -> bool {
    a.repeat.repeat_type == b.repeat.repeat_type
        && a.repeat.interval == b.repeat.interval
        && a.repeat.end_date == b.repeat.end_date
        && a.title == b.title
        && a.start_time == b.start_time
        && a.end_time == b.end_time
}

/// Every event in `all` belonging to the same series as `reference`, the
/// reference itself included, in input order.
pub fn find_series_members(reference: &Event, all: &[Event]) -> Vec<Event> {
    all.iter()
        .filter(|event| same_series(reference, event))
        .cloned()
        .collect()
}

/// Fields a group edit may change. `None` leaves a field untouched; dates
/// and repeat descriptors are never part of a patch.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notification: Option<NotificationOffset>,
}

impl EventPatch {
    fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            event.location = Some(location.clone());
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(notification) = self.notification {
            event.notification = notification;
        }
    }
}

/// One record that a best-effort batch could not apply.
#[derive(Debug)]
pub struct BatchFailure {
    /// `None` when the failed record was an unsaved draft (batch create).
    pub event_id: Option<EventId>,
    pub error: CalendarError,
}

/// Outcome of a best-effort batch. Failures are reported, never rolled
/// back or silently hidden.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub applied: Vec<EventId>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn record<T>(&mut self, id: Option<EventId>, outcome: Result<T>) {
        match outcome {
            Ok(_) => {
                if let Some(id) = id {
                    self.applied.push(id);
                }
            }
            Err(error) => {
                log::warn!("batch step failed for event {:?}: {}", id, error);
                self.failures.push(BatchFailure {
                    event_id: id,
                    error,
                });
            }
        }
    }
}

/// Re-saves only the targeted occurrence with the patch applied, demoting
/// its repeat rule to `none` so it detaches from the series. Siblings are
/// untouched.
pub fn edit_single<S: EventStore>(
    store: &mut S,
    event: &Event,
    patch: &EventPatch,
) -> Result<Event> {
    let mut updated = event.clone();
    patch.apply(&mut updated);
    updated.repeat = RepeatRule::none();
    store.replace_event(&updated)
}

/// Applies the patch to every structural member of the series, each record
/// independently re-saved. Dates and repeat descriptors are preserved.
pub fn edit_all<S: EventStore>(
    store: &mut S,
    reference: &Event,
    patch: &EventPatch,
) -> Result<BatchReport> {
    let members = find_series_members(reference, &store.list_events()?);
    let mut report = BatchReport::default();

    for mut member in members {
        let Some(id) = member.id else { continue };
        patch.apply(&mut member);
        let outcome = store.replace_event(&member);
        report.record(Some(id), outcome);
    }

    Ok(report)
}

/// Removes exactly the targeted record.
pub fn delete_single<S: EventStore>(store: &mut S, id: EventId) -> Result<()> {
    store.delete_event(id)
}

/// Removes every structural member of the series.
pub fn delete_all<S: EventStore>(store: &mut S, reference: &Event) -> Result<BatchReport> {
    let members = find_series_members(reference, &store.list_events()?);
    let mut report = BatchReport::default();

    for member in members {
        let Some(id) = member.id else { continue };
        let outcome = store.delete_event(id);
        report.record(Some(id), outcome);
    }

    Ok(report)
}

/// Date-only move of one occurrence. Like [`edit_single`], the record is
/// demoted to non-repeating so it leaves the series.
pub fn move_single<S: EventStore>(
    store: &mut S,
    event: &Event,
    target_date: NaiveDate,
) -> Result<Event> {
    let mut updated = event.clone();
    updated.date = target_date;
    updated.repeat = RepeatRule::none();
    store.replace_event(&updated)
}

/// Shifts every member of the series by the signed day offset between the
/// dragged occurrence's date and `target_date`.
pub fn move_all<S: EventStore>(
    store: &mut S,
    dragged: &Event,
    target_date: NaiveDate,
) -> Result<BatchReport> {
    let offset = target_date - dragged.date;
    let members = find_series_members(dragged, &store.list_events()?);
    let mut report = BatchReport::default();

    for mut member in members {
        let Some(id) = member.id else { continue };
        member.date += offset;
        let outcome = store.replace_event(&member);
        report.record(Some(id), outcome);
    }

    Ok(report)
}
