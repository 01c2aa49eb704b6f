//! Session start filters, axis lock, default suppression and listener scopes.

use glissando::{InputCapabilities, InputEvent, ListenerScope, SliderOptions};
use glissando_foundation::{
    AxisLock, EventKind, Point, PointerButton, PointerData, PointerPhase, PointerType, TargetId,
    TouchData,
};
use glissando_testing::{NotificationLog, RecordingHost, SliderRobot, DRAG_ORIGIN, PRIMARY_POINTER};

fn robot(capabilities: InputCapabilities, options: SliderOptions<String>) -> SliderRobot {
    SliderRobot::new(RecordingHost::new(300.0, 3), capabilities, options)
}

#[test]
fn session_listeners_live_only_while_dragging() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());

    robot.pointer_down(DRAG_ORIGIN);
    assert!(robot.slider().is_dragging());
    let spec = robot.host().spec(ListenerScope::Session).expect("session scope attached");
    assert!(spec.contains(EventKind::PointerMove));
    assert!(spec.contains(EventKind::PointerUp));
    assert!(spec.contains(EventKind::PointerCancel));

    robot.pointer_up();
    assert!(!robot.slider().is_dragging());
    assert!(!robot.host().is_attached(ListenerScope::Session));
    assert!(robot.host().is_attached(ListenerScope::Container));
}

#[test]
fn horizontal_lock_captures_the_pointer_until_release() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());

    robot.pointer_down(DRAG_ORIGIN);
    assert_eq!(robot.host().captured, None);

    robot.pointer_move_by(-30.0, 5.0);
    let session = robot.slider().session().expect("open");
    assert_eq!(session.axis(), AxisLock::Horizontal);
    assert_eq!(robot.host().captured, Some(PRIMARY_POINTER));

    robot.pointer_move_by(-5.0, 80.0);
    assert_eq!(
        robot.slider().session().map(|s| s.axis()),
        Some(AxisLock::Horizontal),
        "axis is decided once"
    );
    assert_eq!(robot.host().capture_count, 1);

    robot.pointer_up();
    assert_eq!(robot.host().captured, None);
}

#[test]
fn vertical_drag_scrolls_the_page_and_never_slides() {
    let log = NotificationLog::new();
    let mut robot = robot(
        InputCapabilities::pointer_only(),
        log.attach(SliderOptions::new()),
    );

    robot.pointer_down(DRAG_ORIGIN);
    let event = robot.pointer_move_by(-4.0, 40.0);
    assert!(!event.is_default_prevented(), "native scroll proceeds");
    assert_eq!(
        robot.slider().session().map(|s| s.axis()),
        Some(AxisLock::VerticalScroll)
    );

    robot.pointer_move_by(-200.0, 10.0);
    robot.pointer_up();

    assert!(robot.host().transforms.is_empty());
    assert_eq!(robot.host().captured, None);
    assert_eq!(robot.slider().get_pos(), 0);
    assert_eq!(log.moves(), 0);
    assert_eq!(log.drag_ends(), 1);
}

#[test]
fn disable_scroll_suppresses_vertical_default() {
    let mut robot = robot(
        InputCapabilities::pointer_only(),
        SliderOptions::new().disable_scroll(true),
    );

    robot.pointer_down(DRAG_ORIGIN);
    let event = robot.pointer_move_by(0.0, 60.0);

    assert!(event.is_default_prevented());
    assert!(robot.host().transforms.is_empty());
}

#[test]
fn horizontal_moves_suppress_default_unless_passive() {
    let mut blocking = robot(InputCapabilities::pointer_only(), SliderOptions::new());
    blocking.pointer_down(DRAG_ORIGIN);
    assert!(blocking.pointer_move_by(-30.0, 0.0).is_default_prevented());

    let mut passive = robot(
        InputCapabilities::pointer_only().with_passive_listeners(true),
        SliderOptions::new().passive(true),
    );
    passive.pointer_down(DRAG_ORIGIN);
    assert!(!passive.pointer_move_by(-30.0, 0.0).is_default_prevented());
    assert!(passive
        .host()
        .spec(ListenerScope::Session)
        .is_some_and(|spec| spec.options.passive));

    let mut unsupported = robot(
        InputCapabilities::pointer_only(),
        SliderOptions::new().passive(true),
    );
    unsupported.pointer_down(DRAG_ORIGIN);
    assert!(
        unsupported.pointer_move_by(-30.0, 0.0).is_default_prevented(),
        "passive option needs platform support"
    );
}

#[test]
fn non_cancelable_events_are_left_alone() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());
    robot.pointer_down(DRAG_ORIGIN);

    let data = PointerData::primary(PRIMARY_POINTER, PointerType::Touch, Point::new(100.0, 100.0));
    let event = robot.send(InputEvent::pointer(PointerPhase::Move, data).with_cancelable(false));

    assert!(!event.is_default_prevented());
    assert_eq!(robot.host().offset(0), Some(-50.0));
}

#[test]
fn ignored_targets_never_start_a_session() {
    let log = NotificationLog::new();
    let mut robot = SliderRobot::new(
        RecordingHost::new(300.0, 3).with_matching_target(TargetId(7), ".no-swipe"),
        InputCapabilities::pointer_only(),
        log.attach(SliderOptions::new().ignore_selector(".no-swipe")),
    );

    robot.pointer_down_on(TargetId(7));
    assert!(!robot.slider().is_dragging());
    assert_eq!(log.drag_starts(), 0);

    robot.pointer_down_on(TargetId(8));
    assert!(robot.slider().is_dragging());
    assert_eq!(log.drag_starts(), 1);
}

#[test]
fn secondary_pointers_and_buttons_are_ignored() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());
    let data = PointerData {
        id: 9,
        pointer_type: PointerType::Touch,
        is_primary: false,
        position: DRAG_ORIGIN,
    };
    robot.send(InputEvent::pointer(PointerPhase::Start, data));
    assert!(!robot.slider().is_dragging());

    let mut mouse = robot_with_mouse();
    mouse.mouse_down(DRAG_ORIGIN, PointerButton::Secondary);
    assert!(!mouse.slider().is_dragging());
    mouse.mouse_down(DRAG_ORIGIN, PointerButton::Primary);
    assert!(mouse.slider().is_dragging());
}

fn robot_with_mouse() -> SliderRobot {
    robot(InputCapabilities::none(), SliderOptions::new().draggable(true))
}

#[test]
fn moves_from_another_pointer_do_not_drive_the_session() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());
    robot.pointer_down(DRAG_ORIGIN);

    let stranger = PointerData::primary(42, PointerType::Touch, Point::new(0.0, 100.0));
    robot.send(InputEvent::pointer(PointerPhase::Move, stranger));
    robot.send(InputEvent::pointer(PointerPhase::End, stranger));

    assert!(robot.slider().is_dragging());
    assert!(robot.host().transforms.is_empty());
}

#[test]
fn multi_touch_is_ignored() {
    let mut robot = robot(InputCapabilities::touch_only(), SliderOptions::new());
    let pinch = TouchData {
        position: DRAG_ORIGIN,
        contacts: 2,
        scale: None,
    };
    robot.send(InputEvent::touch(PointerPhase::Start, pinch));
    assert!(!robot.slider().is_dragging());

    robot.touch_start(DRAG_ORIGIN);
    robot.touch_move_by(-20.0, 0.0);
    assert_eq!(robot.host().offset(0), Some(-20.0));

    let zoom = TouchData {
        position: Point::new(0.0, 100.0),
        contacts: 1,
        scale: Some(1.4),
    };
    robot.send(InputEvent::touch(PointerPhase::Move, zoom));
    assert_eq!(robot.host().offset(0), Some(-20.0), "pinch moves are dropped");

    robot.touch_move_by(-180.0, 0.0);
    robot.touch_end();
    assert_eq!(robot.slider().get_pos(), 1);
}

#[test]
fn mouse_drags_need_draggable_without_pointer_events() {
    let mut plain = robot(InputCapabilities::none(), SliderOptions::new());
    plain.mouse_down(DRAG_ORIGIN, PointerButton::Primary);
    assert!(!plain.slider().is_dragging());

    let mut mouse = robot_with_mouse();
    mouse.mouse_down(DRAG_ORIGIN, PointerButton::Primary);
    mouse.mouse_move_by(-220.0, 0.0);
    mouse.mouse_up();
    assert_eq!(mouse.slider().get_pos(), 1);
}

#[test]
fn cancel_without_movement_only_cleans_up() {
    let log = NotificationLog::new();
    let mut robot = robot(
        InputCapabilities::pointer_only(),
        log.attach(SliderOptions::new()),
    );

    robot.pointer_down(DRAG_ORIGIN);
    robot.pointer_cancel();

    assert!(!robot.slider().is_dragging());
    assert!(robot.host().transforms.is_empty());
    assert_eq!(log.drag_ends(), 1);
    assert!(log.changes().is_empty());
}

#[test]
fn cancel_after_a_drag_still_resolves_it() {
    let mut robot = robot(InputCapabilities::pointer_only(), SliderOptions::new());

    robot.pointer_down(DRAG_ORIGIN);
    robot.pointer_move_by(-200.0, 0.0);
    robot.pointer_cancel();

    assert_eq!(robot.slider().get_pos(), 1);
}

#[test]
fn stop_propagation_marks_handled_events() {
    let mut robot = robot(
        InputCapabilities::pointer_only(),
        SliderOptions::new().stop_propagation(true),
    );
    assert!(robot.pointer_down(DRAG_ORIGIN).is_propagation_stopped());
    assert!(robot.pointer_move_by(-10.0, 0.0).is_propagation_stopped());
    assert!(robot.pointer_up().is_propagation_stopped());

    let mut quiet = robot_default();
    assert!(!quiet.pointer_down(DRAG_ORIGIN).is_propagation_stopped());
}

fn robot_default() -> SliderRobot {
    robot(InputCapabilities::pointer_only(), SliderOptions::new())
}

#[test]
fn paused_slider_rejects_new_sessions() {
    let mut robot = robot_default();

    robot.slider_mut().pause();
    robot.pointer_down(DRAG_ORIGIN);
    assert!(!robot.slider().is_dragging());

    robot.slider_mut().resume();
    robot.pointer_down(DRAG_ORIGIN);
    assert!(robot.slider().is_dragging());
}

#[test]
fn second_press_during_a_session_is_rejected() {
    let log = NotificationLog::new();
    let mut robot = robot(
        InputCapabilities::pointer_only(),
        log.attach(SliderOptions::new()),
    );

    robot.pointer_down(DRAG_ORIGIN);
    robot.pointer_down(Point::new(10.0, 10.0));

    assert_eq!(log.drag_starts(), 1);
    let start = robot.slider().session().map(|s| s.start().position);
    assert_eq!(start, Some(DRAG_ORIGIN));
}
