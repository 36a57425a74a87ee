use crate::model::{Event, Stamp};

/// Interface to the rendering collaborator that owns the authoritative
/// event list. Drag and drop mutations are applied by the surface *before*
/// the policy is consulted, so rejection is a compensating [`revert_last`],
/// not prevention.
///
/// [`revert_last`]: CalendarSurface::revert_last
pub trait CalendarSurface {
    /// Snapshot of all events, or `None` while the surface is still
    /// initializing.
    fn events(&self) -> Option<Vec<Event>>;

    fn add_event(&mut self, event: Event);

    fn remove_event(&mut self, id: &str) -> Option<Event>;

    /// Undo the most recent tentative mutation (add, remove, or move).
    fn revert_last(&mut self);
}

/// One reversible mutation, recorded newest-last.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mutation {
    Added {
        id: String,
    },
    Removed {
        event: Event,
    },
    Moved {
        id: String,
        from_start: Stamp,
        from_end: Option<Stamp>,
    },
}

/// Reference surface: an in-memory event list kept sorted by start, plus a
/// LIFO compensation journal backing [`CalendarSurface::revert_last`]. Used
/// by the test suite and by headless embeddings that bring no renderer.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    events: Vec<Event>,
    journal: Vec<Mutation>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an initial event set. Seeding is not journaled; there is
    /// nothing to revert to.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut surface = Self::new();
        for event in events {
            surface.insert_sorted(event);
        }
        surface
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply a drag to a new slot, journaling the prior position. Returns
    /// false if no event bears `id`.
    pub fn apply_move(&mut self, id: &str, new_start: Stamp, new_end: Option<Stamp>) -> bool {
        let Some(pos) = self.events.iter().position(|e| e.id == id) else {
            return false;
        };
        let mut event = self.events.remove(pos);
        self.journal.push(Mutation::Moved {
            id: event.id.clone(),
            from_start: event.start,
            from_end: event.end,
        });
        event.start = new_start;
        event.end = new_end;
        self.insert_sorted(event);
        true
    }

    /// Tentatively accept an externally dragged event.
    pub fn receive(&mut self, event: Event) {
        self.journal.push(Mutation::Added {
            id: event.id.clone(),
        });
        self.insert_sorted(event);
    }

    /// Insert maintaining sort order by (start, id).
    fn insert_sorted(&mut self, event: Event) {
        let pos = self
            .events
            .partition_point(|e| (e.start, e.id.as_str()) < (event.start, event.id.as_str()));
        self.events.insert(pos, event);
    }

    fn take(&mut self, id: &str) -> Option<Event> {
        let pos = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(pos))
    }
}

impl CalendarSurface for InMemorySurface {
    fn events(&self) -> Option<Vec<Event>> {
        Some(self.events.clone())
    }

    fn add_event(&mut self, event: Event) {
        self.journal.push(Mutation::Added {
            id: event.id.clone(),
        });
        self.insert_sorted(event);
    }

    fn remove_event(&mut self, id: &str) -> Option<Event> {
        let event = self.take(id)?;
        self.journal.push(Mutation::Removed {
            event: event.clone(),
        });
        Some(event)
    }

    fn revert_last(&mut self) {
        // Compensations are not journaled themselves.
        match self.journal.pop() {
            Some(Mutation::Added { id }) => {
                self.take(&id);
            }
            Some(Mutation::Removed { event }) => {
                self.insert_sorted(event);
            }
            Some(Mutation::Moved {
                id,
                from_start,
                from_end,
            }) => {
                if let Some(mut event) = self.take(&id) {
                    event.start = from_start;
                    event.end = from_end;
                    self.insert_sorted(event);
                }
            }
            None => {}
        }
    }
}
