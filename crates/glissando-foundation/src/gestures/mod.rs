pub mod commit;
pub mod resistance;
pub mod session;
pub mod wheel;

pub use commit::{evaluate, is_past_bounds, is_valid_slide, Direction, SwipeMetrics, SwipeOutcome};
pub use resistance::{is_pulling_past_edge, resisted_offset};
pub use session::{AxisLock, GestureSession, SessionStart};
pub use wheel::{damping_factor, normalize_delta, WheelAccumulator};
