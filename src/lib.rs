//! Concurrency-limited calendar scheduling core.
//!
//! Decides whether a proposed event placement (create, drag-move, or
//! drop-from-external-source) may occupy its minute slot, and wraps the
//! decision in the compensating orchestration the rendering surface needs:
//! drags and drops are applied optimistically by the surface, so a rejection
//! reverts the tentative mutation instead of preventing it.
//!
//! The rendering surface itself (grid, drag mechanics, pickers) stays
//! external behind [`surface::CalendarSurface`]; [`surface::InMemorySurface`]
//! is the reference implementation for tests and headless embeddings.

pub mod engine;
pub mod form;
pub mod id;
pub mod limits;
pub mod model;
pub mod notify;
pub mod observability;
pub mod seed;
pub mod surface;

pub use engine::{
    is_admissible, ClickBehavior, ClickOutcome, Scheduler, SchedulerConfig, SchedulerError,
};
pub use form::EventDraft;
pub use model::{Event, EventDetails, SlotKey, Stamp};
pub use surface::{CalendarSurface, InMemorySurface};
