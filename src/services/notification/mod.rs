//! Notification scheduling.
//!
//! Pure computation of which events are inside their due window at a given
//! instant. The already-notified set is caller-owned state, passed in and
//! returned explicitly, so ticks stay deterministic and idempotent whether
//! driven by a timer or on demand. Dismissing an alert is a caller-local
//! action and never removes an id from the set, so nothing re-fires.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::models::event::{Event, EventId};
use crate::models::notification::Notification;

/// True when `now` lies in the due window `[start - offset, start)`.
/// The window closes at the start moment itself: an event that has already
/// begun no longer notifies.
pub fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    let start = event.start_at();
    let window_open = start - Duration::minutes(event.notification.minutes() as i64);
    now >= window_open && now < start
}

fn alert_message(event: &Event) -> String {
    format!("{} starts in {}", event.title, event.notification.label())
}

/// One scheduler tick.
///
/// Returns the alerts that became due at `now` together with the updated
/// notified set. Events whose id is already in `notified` are skipped, so
/// repeated evaluation, with the same or an advancing `now`, emits at most
/// one notification per event instance. Drafts without an id are ignored.
pub fn due_notifications(
    now: NaiveDateTime,
    events: &[Event],
    notified: &HashSet<EventId>,
) -> (Vec<Notification>, HashSet<EventId>) {
    let mut updated = notified.clone();
    let mut fresh = Vec::new();

    for event in events {
        let Some(id) = event.id else { continue };
        if updated.contains(&id) || !is_due(event, now) {
            continue;
        }
        fresh.push(Notification {
            event_id: id,
            message: alert_message(event),
        });
        updated.insert(id);
    }

    if !fresh.is_empty() {
        log::debug!("{} notification(s) newly due at {}", fresh.len(), now);
    }

    (fresh, updated)
}
