//! Programmatic navigation, insertion and transition notifications.

use glissando::{Direction, InputCapabilities, SliderOptions};
use glissando_testing::robot_assertions::assert_rest_offsets;
use glissando_testing::{Notification, NotificationLog, RecordingHost, SliderRobot, DRAG_ORIGIN};

const WIDTH: f32 = 300.0;

fn robot_with_log(count: usize, start: usize) -> (SliderRobot, NotificationLog) {
    let log = NotificationLog::new();
    let robot = SliderRobot::new(
        RecordingHost::new(WIDTH, count),
        InputCapabilities::pointer_only(),
        log.attach(SliderOptions::new().start_slide(start)),
    );
    (robot, log)
}

#[test]
fn next_and_prev_step_one_slide() {
    let (mut robot, _log) = robot_with_log(3, 0);

    robot.slider_mut().next();
    assert_eq!(robot.slider().get_pos(), 1);
    assert_rest_offsets(robot.slider().slide_positions(), 1, WIDTH);

    robot.slider_mut().prev();
    assert_eq!(robot.slider().get_pos(), 0);
    assert_rest_offsets(robot.slider().slide_positions(), 0, WIDTH);
}

#[test]
fn stepping_past_either_end_is_a_noop() {
    let (mut robot, log) = robot_with_log(3, 2);
    robot.host_mut().take_transforms();

    robot.slider_mut().next();
    assert_eq!(robot.slider().get_pos(), 2);
    assert!(robot.host().transforms.is_empty());
    assert!(!robot.slider().needs_frame());

    robot.slider_mut().set_index(0);
    robot.slider_mut().prev();
    assert_eq!(robot.slider().get_pos(), 0);
    robot.frame();
    assert!(log.changes().is_empty());
}

#[test]
fn change_notification_arrives_on_the_next_frame() {
    let (mut robot, log) = robot_with_log(3, 0);

    robot.slider_mut().slide(1, None);
    assert!(log.changes().is_empty());
    assert!(robot.slider().needs_frame());
    assert_eq!(robot.host().frame_requests, 1);

    robot.frame();
    assert_eq!(
        log.entries(),
        vec![Notification::Change {
            index: 1,
            slide: Some("slide-1".to_owned()),
            direction: Direction::Next,
        }]
    );
}

#[test]
fn multi_step_jump_prepositions_the_slides_in_between() {
    let (mut robot, log) = robot_with_log(5, 0);

    robot.slider_mut().slide(3, Some(250));

    let transforms = robot.host().transforms.clone();
    let jumped: Vec<_> = transforms
        .iter()
        .filter(|(_, transform)| transform.duration_ms == 0)
        .map(|(index, transform)| (*index, transform.offset))
        .collect();
    assert_eq!(jumped, vec![(1, -WIDTH), (2, -WIDTH)]);

    let animated: Vec<_> = transforms
        .iter()
        .filter(|(_, transform)| transform.duration_ms == 250)
        .map(|(index, transform)| (*index, transform.offset))
        .collect();
    assert_eq!(animated, vec![(0, -WIDTH), (3, 0.0)]);

    assert_eq!(robot.slider().get_pos(), 3);
    assert_rest_offsets(robot.slider().slide_positions(), 3, WIDTH);

    robot.frame();
    assert_eq!(log.changes(), vec![(3, Direction::Next)]);

    robot.slider_mut().slide(0, None);
    assert_rest_offsets(robot.slider().slide_positions(), 0, WIDTH);
    robot.frame();
    assert_eq!(log.changes(), vec![(3, Direction::Next), (0, Direction::Prev)]);
}

#[test]
fn slide_wraps_the_target_index() {
    let (mut robot, _log) = robot_with_log(5, 0);

    robot.slider_mut().slide(7, None);
    assert_eq!(robot.slider().get_pos(), 2);
}

#[test]
fn slide_to_current_index_does_nothing() {
    let (mut robot, log) = robot_with_log(3, 1);

    robot.slider_mut().slide(1, None);
    robot.slider_mut().slide(4, None);
    robot.frame();

    assert!(robot.host().transforms.is_empty());
    assert!(log.changes().is_empty());
}

#[test]
fn slide_is_ignored_during_a_drag() {
    let (mut robot, _log) = robot_with_log(3, 0);

    robot.pointer_down(DRAG_ORIGIN);
    robot.slider_mut().slide(2, None);

    assert_eq!(robot.slider().get_pos(), 0);
}

#[test]
fn set_index_clamps_and_lays_out_silently() {
    let (mut robot, log) = robot_with_log(3, 0);

    robot.slider_mut().set_index(10);
    robot.frame();

    assert_eq!(robot.slider().get_pos(), 2);
    assert_eq!(robot.host().layouts.len(), 2);
    assert_rest_offsets(robot.slider().slide_positions(), 2, WIDTH);
    assert!(log.entries().is_empty());
}

#[test]
fn appended_slide_joins_the_end() {
    let (mut robot, _log) = robot_with_log(3, 1);

    robot.slider_mut().append_slide("extra".to_owned());

    assert_eq!(robot.slider().get_num_slides(), 4);
    assert_eq!(robot.slider().get_pos(), 1);
    assert_eq!(robot.host().slides[3], "extra");
    assert_rest_offsets(robot.slider().slide_positions(), 1, WIDTH);
}

#[test]
fn prepended_slide_keeps_the_active_slide_active() {
    let (mut robot, _log) = robot_with_log(3, 1);

    robot.slider_mut().prepend_slide("intro".to_owned());

    let slider = robot.slider();
    assert_eq!(slider.get_num_slides(), 4);
    assert_eq!(slider.get_pos(), 2);
    assert_eq!(robot.host().slides[0], "intro");
    assert_eq!(robot.host().slides[2], "slide-1");
    assert_rest_offsets(slider.slide_positions(), 2, WIDTH);
}

#[test]
fn transition_end_reports_only_the_active_slide() {
    let (mut robot, log) = robot_with_log(3, 0);

    robot.transition_end(1);
    assert_eq!(log.transition_ends(), 0);

    robot.transition_end(0);
    assert_eq!(
        log.entries(),
        vec![Notification::TransitionEnd {
            index: 0,
            slide: Some("slide-0".to_owned()),
        }]
    );

    robot.slider_mut().next();
    assert!(robot.slider_mut().transition_end(1));
    assert_eq!(log.transition_ends(), 2);
}
