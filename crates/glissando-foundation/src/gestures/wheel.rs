//! Wheel delta normalization and progressive damping.
//!
//! Wheel input has no press/release, so the accumulated delta stands in for
//! a drag. Damping grows with how far the accumulated travel already is, which
//! keeps a long trackpad swipe from flinging several slides at once.

use crate::gesture_constants::{WHEEL_LINE_HEIGHT, WHEEL_MIN_DELTA, WHEEL_VERTICAL_DAMPING};
use crate::geometry::Point;
use crate::input::{WheelData, WheelDeltaMode};

/// Converts a raw wheel delta to pixels. Pages are one container width.
pub fn normalize_delta(delta: f32, mode: WheelDeltaMode, page_width: f32) -> f32 {
    match mode {
        WheelDeltaMode::Pixel => delta,
        WheelDeltaMode::Line => delta * WHEEL_LINE_HEIGHT,
        WheelDeltaMode::Page => delta * page_width,
    }
}

/// Damping factor for the next increment, keyed to `|accumulated Δx| / W`.
pub fn damping_factor(progress: f32) -> f32 {
    if progress < 0.5 {
        0.7
    } else if progress < 1.0 {
        0.3
    } else if progress < 1.5 {
        0.1
    } else if progress < 2.0 {
        0.05
    } else {
        0.01
    }
}

/// Accumulated drag equivalent of a run of wheel events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelAccumulator {
    delta: Point,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized pixel deltas for `data`.
    pub fn normalized(data: &WheelData, page_width: f32) -> Point {
        Point::new(
            normalize_delta(data.delta_x, data.mode, page_width),
            normalize_delta(data.delta_y, data.mode, page_width),
        )
    }

    /// Whether the event moves far enough horizontally to count.
    pub fn qualifies(data: &WheelData, page_width: f32) -> bool {
        Self::normalized(data, page_width).x.abs() >= WHEEL_MIN_DELTA
    }

    /// Folds one normalized wheel delta in and returns the accumulated drag.
    ///
    /// Scrolling right (`delta_x > 0`) drags the track left, like a swipe
    /// towards the next slide.
    pub fn accumulate(&mut self, wheel: Point, width: f32) -> Point {
        let progress = if width > 0.0 {
            self.delta.x.abs() / width
        } else {
            f32::INFINITY
        };
        self.delta.x -= wheel.x * damping_factor(progress);
        self.delta.y -= wheel.y * WHEEL_VERTICAL_DAMPING;
        self.delta
    }

    pub fn delta(&self) -> Point {
        self.delta
    }

    pub fn reset(&mut self) {
        self.delta = Point::ZERO;
    }
}
