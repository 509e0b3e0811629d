//! Storage collaborator boundary.
//!
//! The scheduling core only ever talks to this trait; it never embeds a
//! specific storage technology. [`SqliteStore`] ships as the reference
//! collaborator. Persistence errors surface unchanged and are never retried
//! here; user-facing messaging about outcomes is the caller's job.

use crate::error::Result;
use crate::models::event::{Event, EventId};

mod sqlite;

pub use sqlite::SqliteStore;

/// Abstract event storage supplied by a collaborator.
pub trait EventStore {
    /// Full read of every persisted occurrence.
    fn list_events(&self) -> Result<Vec<Event>>;

    /// Persists a draft and assigns its id.
    fn create_event(&mut self, draft: Event) -> Result<Event>;

    /// Full overwrite of an existing record by id.
    fn replace_event(&mut self, event: &Event) -> Result<Event>;

    /// Removes a record by id.
    fn delete_event(&mut self, id: EventId) -> Result<()>;
}
