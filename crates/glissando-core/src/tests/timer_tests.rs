use super::*;

#[test]
fn single_slot_timer_fires_once_at_deadline() {
    let mut timer = SingleSlotTimer::new();
    assert_eq!(timer.schedule(100, 50), 150);

    assert!(!timer.fire_if_due(149));
    assert!(timer.fire_if_due(150));
    assert!(!timer.fire_if_due(200), "slot is cleared after firing");
}

#[test]
fn rescheduling_replaces_pending_deadline() {
    let mut timer = SingleSlotTimer::new();
    timer.schedule(0, 50);
    timer.schedule(30, 50);

    assert_eq!(timer.deadline(), Some(80));
    assert!(!timer.fire_if_due(50));
    assert!(timer.fire_if_due(80));
}

#[test]
fn cancel_reports_whether_anything_was_pending() {
    let mut timer = SingleSlotTimer::new();
    assert!(!timer.cancel());
    timer.schedule(0, 10);
    assert!(timer.cancel());
    assert!(!timer.is_pending());
}

#[test]
fn schedule_saturates_instead_of_overflowing() {
    let mut timer = SingleSlotTimer::new();
    assert_eq!(timer.schedule(u64::MAX - 1, 10), u64::MAX);
}

#[test]
fn debouncer_collapses_burst_into_one_call() {
    let mut debouncer = Debouncer::new(150);

    for (i, now) in [0u64, 40, 90, 140].into_iter().enumerate() {
        debouncer.signal(now, i);
        assert_eq!(debouncer.poll(now + 1), None);
    }

    assert_eq!(debouncer.poll(289), None);
    assert_eq!(debouncer.poll(290), Some(3), "only the last signal's payload is delivered");
    assert_eq!(debouncer.poll(1_000), None);
}

#[test]
fn debouncer_cancel_drops_pending_payload() {
    let mut debouncer = Debouncer::new(150);
    debouncer.signal(0, "resize");

    assert_eq!(debouncer.cancel(), Some("resize"));
    assert_eq!(debouncer.poll(500), None);
    assert!(!debouncer.is_pending());
}
