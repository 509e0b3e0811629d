// Event module
// Persisted calendar occurrence and its pre-persistence draft form

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::category::Category;
use crate::models::notification::NotificationOffset;
use crate::models::repeat::{RepeatRule, RepeatType};

/// Store-assigned identifier, immutable after creation.
pub type EventId = i64;

/// One dated occurrence on the calendar.
///
/// A record with `id: None` is a draft: the shape the UI hands over for
/// overlap checks and recurrence expansion before the store assigns an id.
/// Occurrences of a recurring series are fully independent records sharing
/// the same repeat descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub repeat: RepeatRule,
    #[serde(default)]
    pub notification: NotificationOffset,
}

impl Event {
    /// Create a new draft event with the required fields.
    ///
    /// # Examples
    /// ```
    /// use calendar_core::models::event::Event;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let event = Event::new(
    ///     "Team Meeting",
    ///     NaiveDate::from_ymd_opt(2025, 11, 25).unwrap(),
    ///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert!(event.id.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, CalendarError> {
        let event = Self {
            id: None,
            title: title.into(),
            description: None,
            location: None,
            date,
            start_time,
            end_time,
            category: Category::default(),
            repeat: RepeatRule::none(),
            notification: NotificationOffset::default(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields.
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the record's invariants.
    ///
    /// Checked before any overlap or recurrence computation and again by the
    /// store on create/replace. The repeat end date is deliberately not
    /// compared against the event date here: a template whose end date lies
    /// before its own date legitimately expands to a single occurrence, and
    /// series moves may shift occurrence dates past the shared end date.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::Validation(
                "event title cannot be empty".into(),
            ));
        }

        if self.end_time <= self.start_time {
            return Err(CalendarError::Validation(
                "event end time must be after start time".into(),
            ));
        }

        if self.repeat.repeat_type != RepeatType::None && self.repeat.interval < 1 {
            return Err(CalendarError::Validation(
                "repeat interval must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Check if this event belongs to a recurring series.
    pub fn is_recurring(&self) -> bool {
        self.repeat.is_repeating()
    }

    /// The moment the event starts.
    pub fn start_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// The moment the event ends (same day; no overnight spans).
    pub fn end_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Get the duration of the event.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Builder for creating events with optional fields.
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    category: Category,
    repeat: RepeatRule,
    notification: NotificationOffset,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            location: None,
            date: None,
            start_time: None,
            end_time: None,
            category: Category::default(),
            repeat: RepeatRule::none(),
            notification: NotificationOffset::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn repeat(mut self, repeat: RepeatRule) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn notification(mut self, notification: NotificationOffset) -> Self {
        self.notification = notification;
        self
    }

    /// Build and validate the event.
    pub fn build(self) -> Result<Event, CalendarError> {
        let title = self
            .title
            .ok_or_else(|| CalendarError::Validation("event title is required".into()))?;
        let date = self
            .date
            .ok_or_else(|| CalendarError::Validation("event date is required".into()))?;
        let start_time = self
            .start_time
            .ok_or_else(|| CalendarError::Validation("event start time is required".into()))?;
        let end_time = self
            .end_time
            .ok_or_else(|| CalendarError::Validation("event end time is required".into()))?;

        let event = Event {
            id: None,
            title,
            description: self.description,
            location: self.location,
            date,
            start_time,
            end_time,
            category: self.category,
            repeat: self.repeat,
            notification: self.notification,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
