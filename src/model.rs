use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Local wall-clock datetime — the only time type.
pub type Stamp = NaiveDateTime;

/// Minute-granularity slot key. Two stamps are *concurrent* iff they collapse
/// to the same key; seconds and below are ignored. This is deliberately not
/// an interval-overlap test — only exact-minute start coincidence counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl SlotKey {
    pub fn of(at: Stamp) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
            day: at.day(),
            hour: at.hour(),
            minute: at.minute(),
        }
    }
}

/// A stored calendar event. The id is caller-generated (via an injected
/// [`crate::id::IdSource`]) and stays stable across drags and resizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: Stamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Stamp>,
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: Stamp) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end: None,
        }
    }

    /// The minute slot this event occupies for admission purposes.
    pub fn slot(&self) -> SlotKey {
        SlotKey::of(self.start)
    }
}

/// JSON payload carried by an externally dragged item. The start is resolved
/// by the drop position, not the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPayload {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Stamp>,
}

// ── Query result types ───────────────────────────────────────────

/// Formatted projection for the detail panel. Times are `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
}
