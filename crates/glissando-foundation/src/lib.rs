//! Foundation elements for Glissando: geometry, the input model, capability
//! probing, and the pure gesture primitives the slider engine is built on.

pub mod easing;
pub mod geometry;
pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use easing::Easing;
pub use geometry::Point;
pub use gestures::{AxisLock, Direction, GestureSession, SwipeOutcome, WheelAccumulator};
pub use input::{
    CapabilityProbe, EventKind, InputCapabilities, InputEvent, InputKind, InputSource,
    ListenerOptions, ListenerScope, ListenerSpec, MouseData, PointerButton, PointerData,
    PointerId, PointerPhase, PointerType, TargetId, TouchData, WheelData, WheelDeltaMode,
};

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::geometry::Point;
    pub use crate::gestures::*;
    pub use crate::input::prelude::*;
    pub use crate::input::{CapabilityProbe, InputCapabilities, ListenerScope, ListenerSpec};
}
