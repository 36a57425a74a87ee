use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use slotgate::engine::{ClickOutcome, Scheduler, SchedulerError};
use slotgate::form::EventDraft;
use slotgate::id::SeqIds;
use slotgate::model::Stamp;
use slotgate::seed;
use slotgate::surface::InMemorySurface;

// ── Test infrastructure ──────────────────────────────────────

fn at(day: u32, h: u32, m: u32) -> Stamp {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn draft(title: &str, start_time: &str, end_time: &str) -> EventDraft {
    EventDraft {
        title: title.into(),
        date: "2024-01-01".into(),
        start_time: start_time.into(),
        end_time: end_time.into(),
    }
}

fn fresh_scheduler() -> Scheduler<InMemorySurface> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut ids = SeqIds::new();
    let events = seed::initial_events(at(1, 12, 0), &mut ids);
    Scheduler::new(InMemorySurface::with_events(events), Box::new(ids))
}

#[test]
fn full_user_session() {
    let mut sched = fresh_scheduler();

    // Sidebar subscribes and sees the seeded calendar on later commits.
    let sidebar = Rc::new(RefCell::new(Vec::<usize>::new()));
    let sink = sidebar.clone();
    sched
        .changes()
        .subscribe(move |events| sink.borrow_mut().push(events.len()));
    assert_eq!(sched.event_count(), 1); // the sample event

    // The user selects a range; the form opens pre-filled, nothing created.
    let prefilled = sched.on_range_select(at(1, 9, 0), at(1, 10, 0));
    assert_eq!(prefilled.start_time, "09:00");
    assert_eq!(sched.event_count(), 1);

    // Five manual creations fill the 09:00 slot.
    for i in 0..5 {
        let d = draft(&format!("meeting {i}"), "09:00", "10:00");
        sched.submit_draft(&d).unwrap();
    }
    assert_eq!(sched.slot_occupancy(at(1, 9, 0)), 5);

    // The sixth is turned away with the user-facing limit message.
    let err = sched
        .submit_draft(&draft("one too many", "09:00", "10:00"))
        .unwrap_err();
    assert_eq!(err, SchedulerError::CapacityExceeded(5));
    assert_eq!(
        err.to_string(),
        "cannot add more than 5 events at the same time slot"
    );
    assert_eq!(sched.event_count(), 6); // 1 sample + 5 meetings

    // Dragging one meeting out of the packed slot is admitted...
    let moved_id = sched.current_events()[0].id.clone();
    sched.surface_mut().apply_move(&moved_id, at(1, 15, 0), None);
    sched.on_event_drop(&moved_id, at(1, 15, 0)).unwrap();
    assert_eq!(sched.slot_occupancy(at(1, 9, 0)), 4);

    // ...which makes room for the previously rejected draft.
    sched
        .submit_draft(&draft("one too many", "09:00", "10:00"))
        .unwrap();
    assert_eq!(sched.slot_occupancy(at(1, 9, 0)), 5);

    // An external drop onto the packed slot is received then reverted.
    let before = sched.event_count();
    let err = sched
        .receive_payload(r#"{"title":"imported"}"#, at(1, 9, 0))
        .unwrap_err();
    assert_eq!(err, SchedulerError::CapacityExceeded(5));
    assert_eq!(sched.event_count(), before);

    // The same drop lands fine one minute later.
    let received = sched
        .receive_payload(r#"{"title":"imported"}"#, at(1, 9, 1))
        .unwrap();
    assert_eq!(sched.slot_occupancy(at(1, 9, 1)), 1);

    // Click → confirm → delete.
    match sched.on_event_click(&received.id).unwrap() {
        ClickOutcome::ConfirmDelete(event) => {
            sched.delete_event(&event.id).unwrap();
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(sched.current_events().iter().all(|e| e.id != received.id));

    // The sidebar heard every committed change, and only those.
    let counts = sidebar.borrow();
    assert!(!counts.is_empty());
    assert_eq!(*counts.last().unwrap(), sched.event_count());
}

#[test]
fn drag_between_days_respects_each_slot() {
    let mut sched = fresh_scheduler();

    // Pack Tuesday 09:00.
    for i in 0..5 {
        let mut d = draft(&format!("tue {i}"), "09:00", "09:30");
        d.date = "2024-01-02".into();
        sched.submit_draft(&d).unwrap();
    }

    // A Wednesday event dragged onto the packed Tuesday slot bounces back.
    let mut wed = draft("wed", "09:00", "09:30");
    wed.date = "2024-01-03".into();
    let wed_event = sched.submit_draft(&wed).unwrap();

    sched.surface_mut().apply_move(&wed_event.id, at(2, 9, 0), None);
    let result = sched.on_event_drop(&wed_event.id, at(2, 9, 0));
    assert_eq!(result, Err(SchedulerError::CapacityExceeded(5)));

    let event = sched
        .current_events()
        .iter()
        .find(|e| e.id == wed_event.id)
        .cloned()
        .unwrap();
    assert_eq!(event.start, at(3, 9, 0));
}

#[test]
fn seeded_demo_calendar_spreads_events() {
    let mut ids = SeqIds::new();
    let events = seed::generate_default_events(5, at(1, 12, 0), &mut ids);
    let surface = InMemorySurface::with_events(events);
    let sched = Scheduler::new(surface, Box::new(ids));

    assert_eq!(sched.event_count(), 5);
    // One event per day: every slot stays far under capacity.
    for event in sched.current_events() {
        assert_eq!(sched.slot_occupancy(event.start), 1);
    }
}
