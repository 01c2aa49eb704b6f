pub mod capabilities;
pub mod listeners;
pub mod types;

pub use capabilities::{CapabilityProbe, InputCapabilities};
pub use listeners::{ListenerOptions, ListenerScope, ListenerSpec};
pub use types::{
    EventKind, InputEvent, InputKind, InputSource, MouseData, PointerButton, PointerData,
    PointerId, PointerPhase, PointerType, TargetId, TouchData, WheelData, WheelDeltaMode,
};

pub mod prelude {
    pub use super::types::{
        EventKind, InputEvent, InputKind, InputSource, MouseData, PointerButton, PointerData,
        PointerId, PointerPhase, PointerType, TargetId, TouchData, WheelData, WheelDeltaMode,
    };
}
