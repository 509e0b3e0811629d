//! Save/expand orchestration over an [`EventStore`].
//!
//! Mirrors the application flow: a draft is validated, checked for overlap
//! conflicts (returned as data for the caller to confirm or cancel), then
//! persisted; a repeating draft is exploded into independent occurrence
//! rows, one store call per record.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::event::Event;
use crate::services::overlap::find_overlapping_events;
use crate::services::recurrence;
use crate::services::series::BatchReport;
use crate::services::store::EventStore;

/// Result of a conflict-aware save. Conflicts are data, not an error:
/// proceeding despite them is the caller's decision, made by calling
/// [`EventService::save`] directly afterwards.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(Event),
    Conflicts(Vec<Event>),
}

/// Service coordinating validation, overlap checks, recurrence expansion,
/// and persistence for a borrowed store.
pub struct EventService<'a, S: EventStore> {
    store: &'a mut S,
}

impl<'a, S: EventStore> EventService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Validates the draft and returns every persisted event it overlaps,
    /// in store order. Editing drafts never conflict with their own row.
    pub fn check_conflicts(&self, draft: &Event) -> Result<Vec<Event>> {
        draft.validate()?;
        let existing = self.store.list_events()?;
        Ok(find_overlapping_events(draft, &existing))
    }

    /// Persists the draft unconditionally: create when it has no id yet,
    /// full replace otherwise.
    pub fn save(&mut self, draft: &Event) -> Result<Event> {
        match draft.id {
            Some(_) => self.store.replace_event(draft),
            None => self.store.create_event(draft.clone()),
        }
    }

    /// Conflict-aware save: overlapping events are handed back instead of
    /// being persisted over.
    pub fn save_checked(&mut self, draft: &Event) -> Result<SaveOutcome> {
        let conflicts = self.check_conflicts(draft)?;
        if !conflicts.is_empty() {
            return Ok(SaveOutcome::Conflicts(conflicts));
        }
        Ok(SaveOutcome::Saved(self.save(draft)?))
    }

    /// Expands a repeating template and persists every occurrence,
    /// sequentially and best-effort. A mid-batch failure is recorded in the
    /// report while the remaining occurrences are still attempted; the
    /// caller reconciles by re-fetching afterwards.
    pub fn create_repeating(
        &mut self,
        template: &Event,
        ceiling: NaiveDate,
    ) -> Result<(Vec<Event>, BatchReport)> {
        let occurrences = recurrence::expand(template, ceiling)?;
        let mut created = Vec::with_capacity(occurrences.len());
        let mut report = BatchReport::default();

        for occurrence in occurrences {
            match self.store.create_event(occurrence) {
                Ok(event) => {
                    report.record(event.id, Ok(()));
                    created.push(event);
                }
                Err(err) => report.record(None, Err::<(), _>(err)),
            }
        }

        Ok((created, report))
    }
}
