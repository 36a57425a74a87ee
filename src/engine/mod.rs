mod admission;
mod error;
mod mutations;
mod queries;

pub use admission::{concurrent_count, is_admissible};
pub use error::SchedulerError;

use metrics::{counter, gauge};

use crate::id::IdSource;
use crate::limits::MAX_CONCURRENT_EVENTS;
use crate::model::{Event, EventDetails};
use crate::notify::ChangeHub;
use crate::observability::{self, Trigger};
use crate::surface::CalendarSurface;

/// What clicking an existing event does. The two observed behaviors are
/// mutually exclusive; pick one at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickBehavior {
    /// Ask the host to confirm, then delete via [`Scheduler::delete_event`].
    #[default]
    DeleteWithConfirm,
    /// Show the event's fields in a detail panel instead of deleting.
    ShowDetails,
}

/// Host-facing result of a click, per the configured [`ClickBehavior`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Show a confirmation dialog for this event; on yes, call
    /// [`Scheduler::delete_event`].
    ConfirmDelete(Event),
    /// Render the detail panel.
    Details(EventDetails),
}

#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Maximum events sharing one minute slot.
    pub capacity: usize,
    pub click: ClickBehavior,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CONCURRENT_EVENTS,
            click: ClickBehavior::default(),
        }
    }
}

/// Orchestrates event mutations against the rendering surface: runs the
/// admission policy on every placement attempt, issues compensating reverts
/// on rejection, and keeps the sidebar projection in sync.
pub struct Scheduler<S> {
    surface: S,
    ids: Box<dyn IdSource>,
    config: SchedulerConfig,
    notify: ChangeHub,
    /// Last-synced snapshot, sorted by (start, id). Backs the sidebar.
    current: Vec<Event>,
}

impl<S: CalendarSurface> Scheduler<S> {
    pub fn new(surface: S, ids: Box<dyn IdSource>) -> Self {
        Self::with_config(surface, ids, SchedulerConfig::default())
    }

    pub fn with_config(surface: S, ids: Box<dyn IdSource>, config: SchedulerConfig) -> Self {
        let mut scheduler = Self {
            surface,
            ids,
            config,
            notify: ChangeHub::new(),
            current: Vec::new(),
        };
        scheduler.refresh();
        scheduler
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, for tentative mutations applied by the host
    /// (drags, external receives) before the policy runs.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Change-notification hub; subscribe the sidebar here.
    pub fn changes(&mut self) -> &mut ChangeHub {
        &mut self.notify
    }

    /// The `onEventListChanged` registration point: re-read the surface and
    /// notify subscribers. Called automatically after every committed
    /// mutation; call it directly when the surface changed out of band.
    pub fn on_events_changed(&mut self) {
        self.refresh();
    }

    /// Re-sync the sidebar projection from the surface and fan out.
    pub(super) fn refresh(&mut self) {
        let mut events = self.surface.events().unwrap_or_default();
        events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        gauge!(observability::EVENTS_ACTIVE).set(events.len() as f64);
        self.current = events;
        self.notify.send(&self.current);
    }

    /// Undo a tentatively applied surface mutation and re-sync.
    pub(super) fn compensate(&mut self) {
        self.surface.revert_last();
        counter!(observability::REVERTS_TOTAL).increment(1);
        self.refresh();
    }
}

pub(super) fn record_decision(trigger: Trigger, admitted: bool) {
    let status = if admitted { "admitted" } else { "rejected" };
    counter!(
        observability::ADMISSIONS_TOTAL,
        "trigger" => observability::trigger_label(trigger),
        "status" => status
    )
    .increment(1);
}
