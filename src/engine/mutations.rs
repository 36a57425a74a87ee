use tracing::debug;

use crate::form::EventDraft;
use crate::limits::{MAX_EVENTS, MAX_TITLE_LEN};
use crate::model::{DropPayload, Event, Stamp};
use crate::observability::Trigger;
use crate::surface::CalendarSurface;

use super::admission::{check_capacity, validate_stamp};
use super::{record_decision, ClickBehavior, ClickOutcome, Scheduler, SchedulerError};

impl<S: CalendarSurface> Scheduler<S> {
    /// An existing event was dragged to a new slot. The surface already
    /// holds it at the new position; the event is excluded from the count so
    /// it cannot conflict with itself. On rejection the drop is reverted.
    pub fn on_event_drop(&mut self, event_id: &str, new_start: Stamp) -> Result<(), SchedulerError> {
        let snapshot = self.surface.events();
        if let Err(e) = check_capacity(
            new_start,
            snapshot.as_deref(),
            Some(event_id),
            self.config.capacity,
        ) {
            debug!(event_id, %new_start, "drop rejected, reverting");
            record_decision(Trigger::Drop, false);
            self.compensate();
            return Err(e);
        }
        debug!(event_id, %new_start, "drop admitted");
        record_decision(Trigger::Drop, true);
        self.refresh();
        Ok(())
    }

    /// An externally sourced item was dropped onto the calendar and the
    /// surface already holds the received event. The received record is
    /// excluded from the count, so the decision is against the state
    /// immediately prior to the receipt. On rejection the receipt is
    /// reverted.
    pub fn on_external_receive(&mut self, event_id: &str) -> Result<(), SchedulerError> {
        let snapshot = self.surface.events();
        let Some(events) = snapshot.as_deref() else {
            record_decision(Trigger::Receive, true);
            self.refresh();
            return Ok(());
        };
        let start = events
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| e.start)
            .ok_or_else(|| SchedulerError::NotFound(event_id.to_string()))?;

        if let Err(e) = check_capacity(start, Some(events), Some(event_id), self.config.capacity) {
            debug!(event_id, %start, "receive rejected, reverting");
            record_decision(Trigger::Receive, false);
            self.compensate();
            return Err(e);
        }
        debug!(event_id, %start, "receive admitted");
        record_decision(Trigger::Receive, true);
        self.refresh();
        Ok(())
    }

    /// Resolve an external drop that arrives as a JSON payload: mint an id,
    /// tentatively add the event, then run the same admission as a receive.
    pub fn receive_payload(&mut self, payload: &str, start: Stamp) -> Result<Event, SchedulerError> {
        let payload: DropPayload =
            serde_json::from_str(payload).map_err(|e| SchedulerError::BadPayload(e.to_string()))?;
        validate_stamp(start)?;
        if payload.title.len() > MAX_TITLE_LEN {
            return Err(SchedulerError::LimitExceeded("title too long"));
        }
        if self
            .surface
            .events()
            .is_some_and(|events| events.len() >= MAX_EVENTS)
        {
            return Err(SchedulerError::LimitExceeded("too many events"));
        }

        let event = Event {
            id: self.ids.next(),
            title: payload.title,
            start,
            end: payload.end,
        };
        self.surface.add_event(event.clone());
        self.on_external_receive(&event.id)?;
        Ok(event)
    }

    /// Selecting a range never creates an event; it pre-fills the creation
    /// form for the user to confirm.
    pub fn on_range_select(&self, start: Stamp, end: Stamp) -> EventDraft {
        EventDraft::from_range(start, end)
    }

    /// Manual creation via the form. Validation order: all fields present,
    /// fields parseable, end after start; only then is admission consulted.
    /// Nothing is applied before the decision, so rejection needs no revert
    /// and the host leaves the form open.
    pub fn submit_draft(&mut self, draft: &EventDraft) -> Result<Event, SchedulerError> {
        draft.require_filled()?;
        let (start, end) = draft.parse_times()?;
        if end <= start {
            return Err(SchedulerError::EndNotAfterStart);
        }
        validate_stamp(start)?;
        if draft.title.len() > MAX_TITLE_LEN {
            return Err(SchedulerError::LimitExceeded("title too long"));
        }

        let snapshot = self.surface.events();
        if snapshot.as_deref().is_some_and(|e| e.len() >= MAX_EVENTS) {
            return Err(SchedulerError::LimitExceeded("too many events"));
        }
        if let Err(e) = check_capacity(start, snapshot.as_deref(), None, self.config.capacity) {
            debug!(%start, "manual creation rejected");
            record_decision(Trigger::Create, false);
            return Err(e);
        }

        let event = Event {
            id: self.ids.next(),
            title: draft.title.trim().to_string(),
            start,
            end: Some(end),
        };
        debug!(id = %event.id, %start, "manual creation admitted");
        record_decision(Trigger::Create, true);
        self.surface.add_event(event.clone());
        self.refresh();
        Ok(event)
    }

    /// Clicking an existing event. The outcome depends on the configured
    /// [`ClickBehavior`]; deletion is two-phase because the confirmation
    /// dialog belongs to the host.
    pub fn on_event_click(&self, event_id: &str) -> Result<ClickOutcome, SchedulerError> {
        let snapshot = self.surface.events().unwrap_or_default();
        let event = snapshot
            .iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| SchedulerError::NotFound(event_id.to_string()))?;
        Ok(match self.config.click {
            ClickBehavior::DeleteWithConfirm => ClickOutcome::ConfirmDelete(event.clone()),
            ClickBehavior::ShowDetails => ClickOutcome::Details(super::queries::details_of(event)),
        })
    }

    /// Confirmed deletion, the second phase of
    /// [`ClickBehavior::DeleteWithConfirm`].
    pub fn delete_event(&mut self, event_id: &str) -> Result<Event, SchedulerError> {
        let removed = self
            .surface
            .remove_event(event_id)
            .ok_or_else(|| SchedulerError::NotFound(event_id.to_string()))?;
        debug!(event_id, "event deleted");
        self.refresh();
        Ok(removed)
    }
}
