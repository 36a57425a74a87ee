//! Starter event sets for fresh calendars and demos.

use chrono::Duration;

use crate::id::IdSource;
use crate::model::{Event, Stamp};

/// The single sample event a fresh calendar starts with.
pub fn initial_events(now: Stamp, ids: &mut dyn IdSource) -> Vec<Event> {
    vec![Event::new(ids.next(), "Sample Event", now)]
}

/// Generate `count` placeholder events spread across consecutive days.
pub fn generate_default_events(count: usize, from: Stamp, ids: &mut dyn IdSource) -> Vec<Event> {
    (0..count)
        .filter_map(|i| {
            let start = from.checked_add_signed(Duration::days(i as i64))?;
            Some(Event::new(
                ids.next(),
                format!("Generated Event {}", i + 1),
                start,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SeqIds;
    use chrono::NaiveDate;

    fn noon() -> Stamp {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn initial_set_is_one_sample_event() {
        let mut ids = SeqIds::new();
        let events = initial_events(noon(), &mut ids);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Sample Event");
        assert_eq!(events[0].id, "0");
    }

    #[test]
    fn generated_events_spread_across_days() {
        let mut ids = SeqIds::new();
        let events = generate_default_events(3, noon(), &mut ids);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].start.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(events[2].start.date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(events[2].title, "Generated Event 3");
    }
}
