use crate::geometry::Point;
use std::cell::Cell;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
    Leave,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Which input family opened a gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    Pointer,
    Touch,
    Mouse,
    Wheel,
}

/// Opaque handle to the element an event was dispatched to.
///
/// Only the host can interpret it, e.g. when matching the ignore selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerData {
    pub id: PointerId,
    pub pointer_type: PointerType,
    pub is_primary: bool,
    pub position: Point,
}

impl PointerData {
    pub fn primary(id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self {
            id,
            pointer_type,
            is_primary: true,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchData {
    /// Position of the first changed contact.
    pub position: Point,
    /// Contacts still down when the event fired.
    pub contacts: usize,
    /// Pinch scale reported by the platform, if any.
    pub scale: Option<f32>,
}

impl TouchData {
    pub fn single(position: Point) -> Self {
        Self {
            position,
            contacts: 1,
            scale: None,
        }
    }

    /// More than one finger down, or a pinch in progress.
    pub fn is_multi_touch(&self) -> bool {
        self.contacts > 1 || self.scale.is_some_and(|scale| scale != 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseData {
    pub button: PointerButton,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelData {
    pub delta_x: f32,
    pub delta_y: f32,
    pub mode: WheelDeltaMode,
}

impl WheelData {
    pub fn pixels(delta_x: f32, delta_y: f32) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Pixel,
        }
    }
}

/// Raw input signal as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputKind {
    Pointer(PointerPhase, PointerData),
    Touch(PointerPhase, TouchData),
    Mouse(PointerPhase, MouseData),
    Wheel(WheelData),
    Resize,
    /// A slide finished its transition.
    TransitionEnd { slide: usize },
}

/// Dispatch key for [`InputEvent`]s; one variant per listener the host can attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    PointerLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseLeave,
    Wheel,
    Resize,
    TransitionEnd,
}

impl EventKind {
    /// The DOM event type name, for hosts that bind listeners by name.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::PointerDown => "pointerdown",
            EventKind::PointerMove => "pointermove",
            EventKind::PointerUp => "pointerup",
            EventKind::PointerCancel => "pointercancel",
            EventKind::PointerLeave => "pointerleave",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchCancel => "touchcancel",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseLeave => "mouseleave",
            EventKind::Wheel => "wheel",
            EventKind::Resize => "resize",
            EventKind::TransitionEnd => "transitionend",
        }
    }
}

/// Input event with default-action and propagation tracking.
///
/// The host keeps ownership of the platform event; after the engine handles
/// this value the host checks [`is_default_prevented`](Self::is_default_prevented)
/// and [`is_propagation_stopped`](Self::is_propagation_stopped) and applies them.
#[derive(Clone, Debug)]
pub struct InputEvent {
    pub input: InputKind,
    pub target: Option<TargetId>,
    pub cancelable: bool,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl InputEvent {
    pub fn new(input: InputKind) -> Self {
        Self {
            input,
            target: None,
            cancelable: true,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn pointer(phase: PointerPhase, data: PointerData) -> Self {
        Self::new(InputKind::Pointer(phase, data))
    }

    pub fn touch(phase: PointerPhase, data: TouchData) -> Self {
        Self::new(InputKind::Touch(phase, data))
    }

    pub fn mouse(phase: PointerPhase, data: MouseData) -> Self {
        Self::new(InputKind::Mouse(phase, data))
    }

    pub fn wheel(data: WheelData) -> Self {
        Self::new(InputKind::Wheel(data))
    }

    pub fn resize() -> Self {
        Self::new(InputKind::Resize)
    }

    pub fn transition_end(slide: usize) -> Self {
        Self::new(InputKind::TransitionEnd { slide })
    }

    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn kind(&self) -> EventKind {
        match &self.input {
            InputKind::Pointer(phase, _) => match phase {
                PointerPhase::Start => EventKind::PointerDown,
                PointerPhase::Move => EventKind::PointerMove,
                PointerPhase::End => EventKind::PointerUp,
                PointerPhase::Cancel => EventKind::PointerCancel,
                PointerPhase::Leave => EventKind::PointerLeave,
            },
            InputKind::Touch(phase, _) => match phase {
                PointerPhase::Start => EventKind::TouchStart,
                PointerPhase::Move => EventKind::TouchMove,
                PointerPhase::End => EventKind::TouchEnd,
                PointerPhase::Cancel | PointerPhase::Leave => EventKind::TouchCancel,
            },
            InputKind::Mouse(phase, _) => match phase {
                PointerPhase::Start => EventKind::MouseDown,
                PointerPhase::Move => EventKind::MouseMove,
                PointerPhase::End => EventKind::MouseUp,
                PointerPhase::Cancel | PointerPhase::Leave => EventKind::MouseLeave,
            },
            InputKind::Wheel(_) => EventKind::Wheel,
            InputKind::Resize => EventKind::Resize,
            InputKind::TransitionEnd { .. } => EventKind::TransitionEnd,
        }
    }

    /// Position of the pointer, contact or mouse, if this event carries one.
    pub fn position(&self) -> Option<Point> {
        match &self.input {
            InputKind::Pointer(_, data) => Some(data.position),
            InputKind::Touch(_, data) => Some(data.position),
            InputKind::Mouse(_, data) => Some(data.position),
            _ => None,
        }
    }

    /// Asks the host to suppress the platform's default action.
    ///
    /// Ignored for events that are not cancelable.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}
