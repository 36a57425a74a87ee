use chrono::Datelike;

use crate::model::{Event, SlotKey, Stamp};

use super::SchedulerError;

/// Count events whose start collapses to the same minute slot as `at`,
/// skipping every record bearing `exclude_id` (all of them, should
/// duplicates exist).
pub fn concurrent_count(at: Stamp, events: &[Event], exclude_id: Option<&str>) -> usize {
    let key = SlotKey::of(at);
    events
        .iter()
        .filter(|e| exclude_id.is_none_or(|x| e.id != x))
        .filter(|e| e.slot() == key)
        .count()
}

/// Pure admission decision: may an event starting at `at` occupy its minute
/// slot, given the snapshot?
///
/// `exclude_id` removes an event from the count — used when moving an
/// existing event so it does not count against itself. A `None` snapshot
/// means the surface has not initialized yet; with no data to conflict
/// against, the policy fails open and admits.
pub fn is_admissible(
    at: Stamp,
    snapshot: Option<&[Event]>,
    exclude_id: Option<&str>,
    capacity: usize,
) -> bool {
    match snapshot {
        None => true,
        Some(events) => concurrent_count(at, events, exclude_id) < capacity,
    }
}

/// [`is_admissible`] in `Result` form for the mutation paths.
pub(crate) fn check_capacity(
    at: Stamp,
    snapshot: Option<&[Event]>,
    exclude_id: Option<&str>,
    capacity: usize,
) -> Result<(), SchedulerError> {
    if is_admissible(at, snapshot, exclude_id, capacity) {
        Ok(())
    } else {
        Err(SchedulerError::CapacityExceeded(capacity))
    }
}

pub(crate) fn validate_stamp(at: Stamp) -> Result<(), SchedulerError> {
    use crate::limits::{MAX_VALID_YEAR, MIN_VALID_YEAR};
    if at.year() < MIN_VALID_YEAR || at.year() > MAX_VALID_YEAR {
        return Err(SchedulerError::LimitExceeded("timestamp out of range"));
    }
    Ok(())
}
