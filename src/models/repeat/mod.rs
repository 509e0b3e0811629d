// Repeat rule module
// Fixed-interval recurrence descriptor shared by every occurrence of a series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Fixed-interval repetition: every `interval` days/weeks/months/years,
/// up to and including `end_date` when one is set.
///
/// A non-repeating event carries `{ type: none, interval: 0 }`. Every
/// occurrence generated from one template shares an identical rule; series
/// membership is inferred from that structural equality rather than a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    pub fn new(repeat_type: RepeatType, interval: u32, end_date: Option<NaiveDate>) -> Self {
        Self {
            repeat_type,
            interval,
            end_date,
        }
    }

    /// Rule for a standalone, non-repeating event.
    pub fn none() -> Self {
        Self {
            repeat_type: RepeatType::None,
            interval: 0,
            end_date: None,
        }
    }

    /// True when this rule describes an actual series.
    pub fn is_repeating(&self) -> bool {
        self.repeat_type != RepeatType::None && self.interval > 0
    }
}

impl Default for RepeatRule {
    fn default() -> Self {
        Self::none()
    }
}
