/// Everything a mutation attempt can fail with. The `Display` text doubles
/// as the user-facing message; no failure is fatal and nothing propagates
/// past the triggering callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    MissingField(&'static str),
    InvalidDate(String),
    InvalidTime(String),
    EndNotAfterStart,
    CapacityExceeded(usize),
    NotFound(String),
    LimitExceeded(&'static str),
    BadPayload(String),
}

impl SchedulerError {
    /// True for the manual-form validation arms.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SchedulerError::MissingField(_)
                | SchedulerError::InvalidDate(_)
                | SchedulerError::InvalidTime(_)
                | SchedulerError::EndNotAfterStart
        )
    }
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::MissingField(field) => {
                write!(f, "please fill in all fields ({field} is empty)")
            }
            SchedulerError::InvalidDate(value) => write!(f, "invalid date: `{value}`"),
            SchedulerError::InvalidTime(value) => write!(f, "invalid time: `{value}`"),
            SchedulerError::EndNotAfterStart => {
                write!(f, "end time must be after start time")
            }
            SchedulerError::CapacityExceeded(cap) => {
                write!(f, "cannot add more than {cap} events at the same time slot")
            }
            SchedulerError::NotFound(id) => write!(f, "no event with id: {id}"),
            SchedulerError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            SchedulerError::BadPayload(e) => write!(f, "malformed drop payload: {e}"),
        }
    }
}

impl std::error::Error for SchedulerError {}
