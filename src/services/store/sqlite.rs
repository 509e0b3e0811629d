//! SQLite-backed [`EventStore`].
//!
//! One `events` table, one row per occurrence. The repeat rule is stored as
//! a JSON column so the descriptor round-trips without a join table; dates
//! and times use rusqlite's chrono conversions.

use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use super::EventStore;
use crate::error::{CalendarError, Result};
use crate::models::category::Category;
use crate::models::event::{Event, EventId};
use crate::models::notification::NotificationOffset;
use crate::models::repeat::RepeatRule;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at the given path.
    pub fn open(path: &str) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Fresh private in-memory database, handy for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            location TEXT,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            category TEXT NOT NULL,
            repeat_rule TEXT NOT NULL,
            notification_minutes INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

impl EventStore for SqliteStore {
    fn list_events(&self) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, location, date, start_time, end_time,
                    category, repeat_rule, notification_minutes
             FROM events
             ORDER BY date ASC, start_time ASC, id ASC",
        )?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    fn create_event(&mut self, mut draft: Event) -> Result<Event> {
        draft.validate()?;

        let repeat_json = serde_json::to_string(&draft.repeat)?;
        self.conn.execute(
            "INSERT INTO events (
                title, description, location, date, start_time, end_time,
                category, repeat_rule, notification_minutes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                draft.title,
                draft.description,
                draft.location,
                draft.date,
                draft.start_time,
                draft.end_time,
                draft.category.as_str(),
                repeat_json,
                draft.notification.minutes(),
            ],
        )?;

        draft.id = Some(self.conn.last_insert_rowid());
        Ok(draft)
    }

    fn replace_event(&mut self, event: &Event) -> Result<Event> {
        let id = event.id.ok_or_else(|| {
            CalendarError::Validation("event id is required for replace".into())
        })?;
        event.validate()?;

        let repeat_json = serde_json::to_string(&event.repeat)?;
        let rows_affected = self.conn.execute(
            "UPDATE events SET
                title = ?, description = ?, location = ?, date = ?,
                start_time = ?, end_time = ?, category = ?, repeat_rule = ?,
                notification_minutes = ?
             WHERE id = ?",
            params![
                event.title,
                event.description,
                event.location,
                event.date,
                event.start_time,
                event.end_time,
                event.category.as_str(),
                repeat_json,
                event.notification.minutes(),
                id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(CalendarError::NotFound(id));
        }

        Ok(event.clone())
    }

    fn delete_event(&mut self, id: EventId) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?", [id])?;

        if rows_affected == 0 {
            return Err(CalendarError::NotFound(id));
        }

        Ok(())
    }
}

fn map_event_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    let category: String = row.get(7)?;
    let category: Category = category
        .parse()
        .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, e.into()))?;

    let repeat_json: String = row.get(8)?;
    let repeat: RepeatRule = serde_json::from_str(&repeat_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

    let minutes: u32 = row.get(9)?;
    let notification = NotificationOffset::try_from(minutes)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Integer, e.into()))?;

    Ok(Event {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        date: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        category,
        repeat,
        notification,
    })
}
