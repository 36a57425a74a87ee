// ── RED metrics (decision-driven) ───────────────────────────────

/// Counter: admission decisions. Labels: trigger, status.
pub const ADMISSIONS_TOTAL: &str = "slotgate_admissions_total";

/// Counter: compensating reverts issued to the surface.
pub const REVERTS_TOTAL: &str = "slotgate_reverts_total";

// ── USE metrics (calendar state) ────────────────────────────────

/// Gauge: events currently on the calendar.
pub const EVENTS_ACTIVE: &str = "slotgate_events_active";

/// The mutation path that asked for admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// An existing event dragged to a new slot.
    Drop,
    /// An externally sourced item dropped onto the calendar.
    Receive,
    /// Manual creation via the form.
    Create,
}

/// Map a trigger to a short label for metrics.
pub fn trigger_label(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Drop => "drop",
        Trigger::Receive => "receive",
        Trigger::Create => "create",
    }
}
