// Notification module
// Transient alert records and the fixed set of notification offsets

use serde::{Deserialize, Serialize};

use crate::models::event::EventId;

/// Minutes before an event's start time at which its notification fires.
/// One of a fixed enumerated set of offsets; serialized as the minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NotificationOffset {
    OneMinute,
    TenMinutes,
    OneHour,
    TwoHours,
    OneDay,
}

impl NotificationOffset {
    pub const ALL: [NotificationOffset; 5] = [
        NotificationOffset::OneMinute,
        NotificationOffset::TenMinutes,
        NotificationOffset::OneHour,
        NotificationOffset::TwoHours,
        NotificationOffset::OneDay,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            NotificationOffset::OneMinute => 1,
            NotificationOffset::TenMinutes => 10,
            NotificationOffset::OneHour => 60,
            NotificationOffset::TwoHours => 120,
            NotificationOffset::OneDay => 1440,
        }
    }

    /// Human-readable duration used in alert messages.
    pub fn label(self) -> &'static str {
        match self {
            NotificationOffset::OneMinute => "1 minute",
            NotificationOffset::TenMinutes => "10 minutes",
            NotificationOffset::OneHour => "1 hour",
            NotificationOffset::TwoHours => "2 hours",
            NotificationOffset::OneDay => "1 day",
        }
    }
}

impl Default for NotificationOffset {
    fn default() -> Self {
        NotificationOffset::TenMinutes
    }
}

impl From<NotificationOffset> for u32 {
    fn from(offset: NotificationOffset) -> Self {
        offset.minutes()
    }
}

impl TryFrom<u32> for NotificationOffset {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        NotificationOffset::ALL
            .into_iter()
            .find(|offset| offset.minutes() == minutes)
            .ok_or_else(|| format!("unsupported notification offset: {minutes} minutes"))
    }
}

/// Ephemeral user-facing alert produced by the notification scheduler.
/// Held in process-local state by the caller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: EventId,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(NotificationOffset::OneMinute, 1)]
    #[test_case(NotificationOffset::TenMinutes, 10)]
    #[test_case(NotificationOffset::OneHour, 60)]
    #[test_case(NotificationOffset::TwoHours, 120)]
    #[test_case(NotificationOffset::OneDay, 1440)]
    fn test_offset_minutes(offset: NotificationOffset, expected: u32) {
        assert_eq!(offset.minutes(), expected);
        assert_eq!(NotificationOffset::try_from(expected), Ok(offset));
    }

    #[test]
    fn test_unsupported_offset_rejected() {
        assert!(NotificationOffset::try_from(15).is_err());
    }

    #[test]
    fn test_default_is_ten_minutes() {
        assert_eq!(NotificationOffset::default(), NotificationOffset::TenMinutes);
    }

    #[test]
    fn test_serializes_as_minute_count() {
        let json = serde_json::to_string(&NotificationOffset::OneHour).unwrap();
        assert_eq!(json, "60");

        let back: NotificationOffset = serde_json::from_str("1440").unwrap();
        assert_eq!(back, NotificationOffset::OneDay);
    }
}
