use crate::model::Event;

/// Listener invoked with the full, sorted event list after every committed
/// change.
pub type ChangeListener = Box<dyn FnMut(&[Event])>;

/// Fan-out point for live views of the event list (the sidebar). Execution
/// is single-threaded: listeners run synchronously inside the callback that
/// committed the change.
#[derive(Default)]
pub struct ChangeHub {
    listeners: Vec<ChangeListener>,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Fired on every committed mutation and every
    /// explicit re-sync.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Event]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify all listeners. No-op if nobody is listening.
    pub fn send(&mut self, events: &[Event]) {
        for listener in &mut self.listeners {
            listener(events);
        }
    }

    /// Drop all listeners (e.g. when the sidebar is torn down).
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;

    fn sample_event() -> Event {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Event::new("1", "standup", start)
    }

    #[test]
    fn subscribe_and_receive() {
        let mut hub = ChangeHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        hub.subscribe(move |events| sink.borrow_mut().push(events.len()));

        hub.send(&[sample_event()]);
        hub.send(&[]);
        assert_eq!(*seen.borrow(), vec![1, 0]);
    }

    #[test]
    fn send_without_subscribers_is_noop() {
        let mut hub = ChangeHub::new();
        // No listener — should not panic
        hub.send(&[sample_event()]);
    }

    #[test]
    fn clear_removes_listeners() {
        let mut hub = ChangeHub::new();
        let seen = Rc::new(RefCell::new(0usize));
        let sink = seen.clone();
        hub.subscribe(move |_| *sink.borrow_mut() += 1);

        hub.send(&[]);
        hub.clear();
        hub.send(&[]);
        assert_eq!(*seen.borrow(), 1);
    }
}
