use crate::form::TIME_FMT;
use crate::model::{Event, EventDetails, Stamp};
use crate::surface::CalendarSurface;

use super::admission::concurrent_count;
use super::Scheduler;

impl<S: CalendarSurface> Scheduler<S> {
    /// Events as last synced from the surface, sorted by (start, id).
    pub fn current_events(&self) -> &[Event] {
        &self.current
    }

    pub fn event_count(&self) -> usize {
        self.current.len()
    }

    /// How many events already occupy the minute slot at `at`.
    pub fn slot_occupancy(&self, at: Stamp) -> usize {
        concurrent_count(at, &self.current, None)
    }

    /// Detail-panel projection for one event.
    pub fn event_details(&self, event_id: &str) -> Option<EventDetails> {
        self.current
            .iter()
            .find(|e| e.id == event_id)
            .map(details_of)
    }
}

pub(super) fn details_of(event: &Event) -> EventDetails {
    EventDetails {
        title: event.title.clone(),
        start: event.start.format(TIME_FMT).to_string(),
        end: event.end.map(|e| e.format(TIME_FMT).to_string()),
    }
}
