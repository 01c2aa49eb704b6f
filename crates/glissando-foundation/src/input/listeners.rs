//! Listener sets the engine asks its host to attach.
//!
//! Two scopes exist: the container scope lives from `setup` to `kill` and
//! carries interaction starts, wheel, resize and transition events. The session
//! scope only lives while a drag is open and carries its move/end events.

use super::capabilities::InputCapabilities;
use super::types::{EventKind, InputSource};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    Container,
    Session,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Non-blocking listener; the engine never prevents default through it.
    pub passive: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerSpec {
    pub scope: ListenerScope,
    pub kinds: SmallVec<[EventKind; 8]>,
    pub options: ListenerOptions,
}

impl ListenerSpec {
    /// Container listeners, picking the best available start tier.
    ///
    /// Unified pointer input wins; otherwise legacy touch, plus mouse drags
    /// when `draggable` is set.
    pub fn container(
        capabilities: &InputCapabilities,
        draggable: bool,
        mousewheel: bool,
        passive: bool,
    ) -> Self {
        let mut kinds = SmallVec::new();
        if capabilities.unified_pointer_input {
            kinds.push(EventKind::PointerDown);
        } else {
            if capabilities.legacy_touch {
                kinds.push(EventKind::TouchStart);
            }
            if draggable {
                kinds.push(EventKind::MouseDown);
            }
        }
        if mousewheel {
            kinds.push(EventKind::Wheel);
        }
        kinds.push(EventKind::Resize);
        kinds.push(EventKind::TransitionEnd);

        Self {
            scope: ListenerScope::Container,
            kinds,
            options: ListenerOptions { passive },
        }
    }

    /// Move/end listeners for a session opened by `source`.
    pub fn session(source: InputSource, passive: bool) -> Self {
        let kinds: SmallVec<[EventKind; 8]> = match source {
            InputSource::Pointer => SmallVec::from_slice(&[
                EventKind::PointerMove,
                EventKind::PointerUp,
                EventKind::PointerCancel,
                EventKind::PointerLeave,
            ]),
            InputSource::Touch => SmallVec::from_slice(&[
                EventKind::TouchMove,
                EventKind::TouchEnd,
                EventKind::TouchCancel,
            ]),
            InputSource::Mouse => SmallVec::from_slice(&[
                EventKind::MouseMove,
                EventKind::MouseUp,
                EventKind::MouseLeave,
            ]),
            InputSource::Wheel => SmallVec::new(),
        };

        Self {
            scope: ListenerScope::Session,
            kinds,
            options: ListenerOptions { passive },
        }
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }
}
