//! Commit rule for a finished session.

use super::session::AxisLock;
use crate::gesture_constants::{FLICK_MAX_DURATION_MS, FLICK_MIN_DISTANCE};
use crate::gestures::resistance::is_pulling_past_edge;

/// Travel direction of an index change.
///
/// Signed like the horizontal delta that produced it: advancing to the next
/// slide drags leftwards (−1), retreating drags rightwards (+1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    None,
    Prev,
}

impl Direction {
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x < 0.0 {
            Direction::Next
        } else if delta_x > 0.0 {
            Direction::Prev
        } else {
            Direction::None
        }
    }

    /// Direction of a jump from `from` to `to`: `sign(from − to)`.
    pub fn between(from: usize, to: usize) -> Self {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Direction::Next,
            std::cmp::Ordering::Equal => Direction::None,
            std::cmp::Ordering::Greater => Direction::Prev,
        }
    }

    pub fn signum(self) -> i32 {
        match self {
            Direction::Next => -1,
            Direction::None => 0,
            Direction::Prev => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    CommitNext,
    CommitPrev,
    SnapBack,
}

impl SwipeOutcome {
    pub fn direction(self) -> Direction {
        match self {
            SwipeOutcome::CommitNext => Direction::Next,
            SwipeOutcome::CommitPrev => Direction::Prev,
            SwipeOutcome::SnapBack => Direction::None,
        }
    }
}

/// Everything the commit rule looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeMetrics {
    pub delta_x: f32,
    pub duration_ms: u64,
    pub width: f32,
    pub index: usize,
    pub count: usize,
    pub axis: AxisLock,
}

/// A quick flick over the minimum distance, or a drag past half the width.
pub fn is_valid_slide(delta_x: f32, duration_ms: u64, width: f32) -> bool {
    let distance = delta_x.abs();
    (duration_ms < FLICK_MAX_DURATION_MS && distance > FLICK_MIN_DISTANCE) || distance > width / 2.0
}

pub fn is_past_bounds(delta_x: f32, index: usize, count: usize) -> bool {
    is_pulling_past_edge(delta_x, index, count)
}

/// Decides whether a finished session commits an index change.
///
/// Vertical-scroll sessions never change the index.
pub fn evaluate(metrics: &SwipeMetrics) -> SwipeOutcome {
    if metrics.axis == AxisLock::VerticalScroll || metrics.count == 0 {
        return SwipeOutcome::SnapBack;
    }
    let valid = is_valid_slide(metrics.delta_x, metrics.duration_ms, metrics.width);
    let past_bounds = is_past_bounds(metrics.delta_x, metrics.index, metrics.count);
    if !valid || past_bounds {
        return SwipeOutcome::SnapBack;
    }
    match Direction::from_delta(metrics.delta_x) {
        Direction::Next => SwipeOutcome::CommitNext,
        Direction::Prev => SwipeOutcome::CommitPrev,
        Direction::None => SwipeOutcome::SnapBack,
    }
}

#[cfg(test)]
#[path = "../tests/commit_tests.rs"]
mod tests;
