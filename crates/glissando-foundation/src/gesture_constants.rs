//! Shared gesture constants.
//!
//! All distances are logical pixels, all durations milliseconds.

/// Margin by which vertical travel must exceed horizontal travel before a
/// session locks to vertical scrolling.
pub const AXIS_LOCK_MARGIN: f32 = 10.0;

/// A swipe shorter than this counts as a flick.
pub const FLICK_MAX_DURATION_MS: u64 = 250;

/// Minimum horizontal travel for a flick to commit.
pub const FLICK_MIN_DISTANCE: f32 = 20.0;

/// Wheel events with a smaller normalized horizontal delta are ignored.
pub const WHEEL_MIN_DELTA: f32 = 3.0;

/// Quiet period after the last wheel event before the wheel session ends.
pub const WHEEL_SILENCE_MS: u64 = 50;

/// Pixel equivalent of one wheel line.
pub const WHEEL_LINE_HEIGHT: f32 = 16.0;

/// Fixed damping applied to vertical wheel travel.
pub const WHEEL_VERTICAL_DAMPING: f32 = 0.5;

/// Quiet period after the last resize signal before layout re-runs.
pub const RESIZE_DEBOUNCE_MS: u64 = 150;
