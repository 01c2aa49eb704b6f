//! Gesture session record.
//!
//! A session lives from an accepted interaction start to its resolved end.
//! It only records what happened; the slider decides what to render and
//! whether to commit.

use crate::gesture_constants::AXIS_LOCK_MARGIN;
use crate::geometry::Point;
use crate::input::{InputSource, PointerId};

/// Axis a session has locked to. Decided once, on the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLock {
    Undecided,
    Horizontal,
    VerticalScroll,
}

impl AxisLock {
    /// Vertical wins only when it beats horizontal travel by [`AXIS_LOCK_MARGIN`].
    pub fn resolve(delta: Point) -> Self {
        if delta.y.abs() > delta.x.abs() + AXIS_LOCK_MARGIN {
            AxisLock::VerticalScroll
        } else {
            AxisLock::Horizontal
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStart {
    pub position: Point,
    pub time_ms: u64,
    pub pointer_id: Option<PointerId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    source: InputSource,
    start: SessionStart,
    delta: Point,
    axis: AxisLock,
    captured: Option<PointerId>,
}

impl GestureSession {
    pub fn begin(
        source: InputSource,
        position: Point,
        time_ms: u64,
        pointer_id: Option<PointerId>,
    ) -> Self {
        Self {
            source,
            start: SessionStart {
                position,
                time_ms,
                pointer_id,
            },
            delta: Point::ZERO,
            axis: AxisLock::Undecided,
            captured: None,
        }
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    pub fn start(&self) -> SessionStart {
        self.start
    }

    pub fn delta(&self) -> Point {
        self.delta
    }

    pub fn axis(&self) -> AxisLock {
        self.axis
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Updates the live delta from an absolute position.
    pub fn track(&mut self, position: Point) -> Point {
        self.delta = position - self.start.position;
        self.delta
    }

    /// Replaces the live delta; used by synthetic sessions with no position.
    pub fn set_delta(&mut self, delta: Point) {
        self.delta = delta;
    }

    /// Locks the axis from the current delta.
    ///
    /// Returns the lock only on the call that decided it; afterwards `None`.
    pub fn lock_axis(&mut self) -> Option<AxisLock> {
        if self.axis != AxisLock::Undecided {
            return None;
        }
        self.axis = AxisLock::resolve(self.delta);
        Some(self.axis)
    }

    pub fn is_horizontal(&self) -> bool {
        self.axis == AxisLock::Horizontal
    }

    pub fn is_vertical_scroll(&self) -> bool {
        self.axis == AxisLock::VerticalScroll
    }

    pub fn mark_captured(&mut self, id: PointerId) {
        self.captured = Some(id);
    }

    pub fn take_capture(&mut self) -> Option<PointerId> {
        self.captured.take()
    }

    /// Whether any delta was ever recorded.
    pub fn has_moved(&self) -> bool {
        self.delta != Point::ZERO
    }

    pub fn duration_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.start.time_ms)
    }
}

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod tests;
