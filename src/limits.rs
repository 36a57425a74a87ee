//! Operational ceilings. Everything here surfaces as `LimitExceeded` when
//! violated, except the slot capacity which has its own error arm.

/// Maximum events whose starts may share one minute-granularity slot.
pub const MAX_CONCURRENT_EVENTS: usize = 5;

/// Maximum events on the calendar at once.
pub const MAX_EVENTS: usize = 10_000;

/// Maximum event title length in bytes.
pub const MAX_TITLE_LEN: usize = 256;

/// Sanity window for event years.
pub const MIN_VALID_YEAR: i32 = 1970;
pub const MAX_VALID_YEAR: i32 = 3000;
