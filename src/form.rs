use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::engine::SchedulerError;
use crate::model::Stamp;

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";
pub(crate) const TIME_FMT: &str = "%H:%M";

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "10:00";

/// In-flight candidate backing the manual-creation form. Fields hold the
/// form's raw strings; nothing is parsed until submit, and no id exists
/// until admission succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl EventDraft {
    /// Blank form for `date`, pre-filled with the default one-hour range.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: date.format(DATE_FMT).to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
        }
    }

    /// Pre-fill from a selected calendar range. Selecting never creates an
    /// event; the user confirms through the form.
    pub fn from_range(start: Stamp, end: Stamp) -> Self {
        Self {
            title: String::new(),
            date: start.date().format(DATE_FMT).to_string(),
            start_time: start.format(TIME_FMT).to_string(),
            end_time: end.format(TIME_FMT).to_string(),
        }
    }

    /// First validation stage: all four fields must be non-empty.
    pub(crate) fn require_filled(&self) -> Result<(), SchedulerError> {
        let fields = [
            ("title", &self.title),
            ("date", &self.date),
            ("start time", &self.start_time),
            ("end time", &self.end_time),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(SchedulerError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Second stage: parse the date + time fields into concrete stamps.
    pub(crate) fn parse_times(&self) -> Result<(Stamp, Stamp), SchedulerError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FMT)
            .map_err(|_| SchedulerError::InvalidDate(self.date.clone()))?;
        let start = NaiveTime::parse_from_str(self.start_time.trim(), TIME_FMT)
            .map_err(|_| SchedulerError::InvalidTime(self.start_time.clone()))?;
        let end = NaiveTime::parse_from_str(self.end_time.trim(), TIME_FMT)
            .map_err(|_| SchedulerError::InvalidTime(self.end_time.clone()))?;
        Ok((date.and_time(start), date.and_time(end)))
    }
}
