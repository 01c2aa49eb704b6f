//! Assertion helpers for slider state.

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the rest-offset invariant around `active`: slides before it sit
/// at `-width`, the active slide at zero and slides after it at `+width`.
pub fn assert_rest_offsets(positions: &[f32], active: usize, width: f32) {
    for (index, offset) in positions.iter().enumerate() {
        let expected = match index.cmp(&active) {
            std::cmp::Ordering::Less => -width,
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => width,
        };
        assert_approx_eq(*offset, expected, 0.001, &format!("slide {index} rest offset"));
    }
}

/// Assert that `actual` offsets match `expected`, slide by slide.
pub fn assert_offsets(actual: &[Option<f32>], expected: &[f32], msg: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: slide count", msg);
    for (index, (actual, expected)) in actual.iter().zip(expected).enumerate() {
        match actual {
            Some(actual) => assert_approx_eq(*actual, *expected, 0.001, &format!("{msg} - slide {index}")),
            None => panic!("{}: slide {} has no offset", msg, index),
        }
    }
}
