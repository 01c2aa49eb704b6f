//! Layout pass, deferred first layout and debounced relayout.

use glissando::{InputCapabilities, ListenerScope, SliderOptions};
use glissando_foundation::EventKind;
use glissando_testing::robot_assertions::{assert_offsets, assert_rest_offsets};
use glissando_testing::{RecordingHost, SliderRobot};

fn pointer_robot(count: usize, options: SliderOptions<String>) -> SliderRobot {
    SliderRobot::new(
        RecordingHost::new(300.0, count),
        InputCapabilities::pointer_only(),
        options,
    )
}

#[test]
fn rest_offsets_fan_out_for_every_start_index() {
    for count in 1..=5 {
        for start in 0..count {
            let robot = pointer_robot(count, SliderOptions::new().start_slide(start));
            let slider = robot.slider();

            assert_eq!(slider.get_pos(), start);
            assert_eq!(slider.slide_positions().len(), count);
            assert_rest_offsets(slider.slide_positions(), start, 300.0);
        }
    }
}

#[test]
fn layout_is_applied_in_one_batch() {
    let robot = pointer_robot(3, SliderOptions::new().start_slide(1));
    let host = robot.host();

    assert_eq!(host.layouts.len(), 1);
    let plan = host.last_layout().expect("layout applied");
    assert_eq!(plan.track_width, 1_800.0);
    assert_eq!(plan.slide_width, 300.0);
    assert_eq!(
        plan.slides.iter().map(|slide| slide.left).collect::<Vec<_>>(),
        vec![0.0, -300.0, -600.0]
    );
    assert_offsets(&host.offsets(), &[-300.0, 0.0, 300.0], "after layout");
    assert!(host.transforms.is_empty(), "layout does not animate");
}

#[test]
fn start_slide_is_clamped_into_range() {
    let robot = pointer_robot(3, SliderOptions::new().start_slide(9));
    assert_eq!(robot.slider().get_pos(), 2);
    assert_rest_offsets(robot.slider().slide_positions(), 2, 300.0);
}

#[test]
fn container_listeners_follow_capabilities() {
    let pointer = pointer_robot(2, SliderOptions::new());
    let spec = pointer.host().spec(ListenerScope::Container).expect("attached");
    assert!(spec.contains(EventKind::PointerDown));
    assert!(!spec.contains(EventKind::TouchStart));
    assert!(spec.contains(EventKind::Wheel));
    assert!(spec.contains(EventKind::Resize));

    let touch = SliderRobot::new(
        RecordingHost::new(300.0, 2),
        InputCapabilities::touch_only(),
        SliderOptions::new().draggable(true).mousewheel(false),
    );
    let spec = touch.host().spec(ListenerScope::Container).expect("attached");
    assert!(spec.contains(EventKind::TouchStart));
    assert!(spec.contains(EventKind::MouseDown));
    assert!(!spec.contains(EventKind::Wheel));
}

#[test]
fn setup_reattaches_listeners_instead_of_stacking_them() {
    let mut robot = pointer_robot(3, SliderOptions::new());

    robot.slider_mut().setup(None);
    robot.slider_mut().setup(None);

    let host = robot.host();
    assert_eq!(host.layouts.len(), 3);
    assert_eq!(
        host.attached
            .iter()
            .filter(|spec| spec.scope == ListenerScope::Container)
            .count(),
        1
    );
    assert_eq!(host.detach_count, 2);
}

#[test]
fn setup_with_options_replaces_config_and_keeps_live_index() {
    let mut robot = pointer_robot(4, SliderOptions::new().start_slide(1).draggable(true));
    robot.slider_mut().next();
    assert_eq!(robot.slider().get_pos(), 2);

    robot.slider_mut().setup(Some(SliderOptions::new().speed(120)));
    let slider = robot.slider();
    assert_eq!(slider.config().speed, 120);
    assert!(!slider.config().draggable, "config is replaced wholesale");
    assert_eq!(slider.get_pos(), 2);
    assert_rest_offsets(slider.slide_positions(), 2, 300.0);

    robot
        .slider_mut()
        .setup(Some(SliderOptions::new().start_slide(0)));
    assert_eq!(robot.slider().get_pos(), 0);
}

#[test]
fn missing_track_or_slides_degrade_to_noop() {
    let mut robot = SliderRobot::new(
        RecordingHost::without_track(),
        InputCapabilities::pointer_only(),
        SliderOptions::new(),
    );
    assert_eq!(robot.slider().get_num_slides(), 0);
    assert!(robot.host().layouts.is_empty());
    assert!(robot.host().attached.is_empty());

    robot.slider_mut().next();
    robot.slider_mut().slide(3, None);
    robot.swipe(-200.0, 100);
    assert_eq!(robot.slider().get_pos(), 0);

    let empty = pointer_robot(0, SliderOptions::new());
    assert_eq!(empty.slider().get_num_slides(), 0);
    assert!(empty.host().layouts.is_empty());
}

#[test]
fn deferred_layout_runs_on_next_frame() {
    let mut robot = SliderRobot::deferred(
        RecordingHost::new(300.0, 3),
        InputCapabilities::pointer_only(),
        SliderOptions::new().start_slide(2),
    );
    assert!(robot.host().layouts.is_empty());
    assert!(robot.slider().needs_frame());
    assert_eq!(robot.host().frame_requests, 1);

    robot.frame();

    assert_eq!(robot.host().layouts.len(), 1);
    assert_eq!(robot.slider().get_pos(), 2);
    assert!(!robot.slider().needs_frame());
}

#[test]
fn resize_burst_collapses_into_one_layout() {
    let mut robot = pointer_robot(3, SliderOptions::new());
    assert_eq!(robot.host().layouts.len(), 1);

    robot.resize();
    for _ in 0..3 {
        robot.advance(40);
        robot.resize();
    }
    robot.advance(10);
    assert_eq!(robot.now(), 130);
    robot.resize();
    assert_eq!(robot.slider().next_deadline(), Some(280));

    robot.host_mut().width = Some(400.0);
    assert!(!robot.advance(149));
    assert_eq!(robot.host().layouts.len(), 1);

    assert!(robot.advance(1));
    assert_eq!(robot.host().layouts.len(), 2);
    assert_eq!(robot.slider().width(), 400.0);
    assert_rest_offsets(robot.slider().slide_positions(), 0, 400.0);

    assert!(!robot.advance(1_000));
    assert_eq!(robot.host().layouts.len(), 2);
    assert_eq!(robot.slider().next_deadline(), None);
}

#[test]
fn late_resize_signal_runs_the_overdue_layout_first() {
    let mut robot = pointer_robot(3, SliderOptions::new());

    robot.resize();
    robot.clock().advance(200);
    robot.host_mut().width = Some(400.0);
    robot.resize();

    assert_eq!(robot.host().layouts.len(), 2);
    assert_eq!(robot.slider().width(), 400.0);
    assert_eq!(robot.slider().next_deadline(), Some(350));

    assert!(robot.advance(150));
    assert_eq!(robot.host().layouts.len(), 3);
}
