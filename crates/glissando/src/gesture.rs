//! Drag sessions: start, axis lock, tracking with edge resistance, and the
//! commit or snap-back decision at release.

use crate::host::SliderHost;
use crate::renderer::neighbours;
use crate::slider::Slider;
use glissando_foundation::gestures::{evaluate, resisted_offset, SwipeMetrics};
use glissando_foundation::{
    AxisLock, GestureSession, InputEvent, InputKind, InputSource, ListenerScope, ListenerSpec,
    Point, PointerButton, PointerId, SwipeOutcome,
};

/// Where a start or move event points, and who produced it.
struct Contact {
    source: InputSource,
    position: Point,
    pointer_id: Option<PointerId>,
}

/// Reads the contact from a pointer, touch or mouse event.
///
/// Non-primary pointers, multi-touch and non-primary mouse buttons yield
/// `None`.
fn contact(event: &InputEvent) -> Option<Contact> {
    match &event.input {
        InputKind::Pointer(_, data) if data.is_primary => Some(Contact {
            source: InputSource::Pointer,
            position: data.position,
            pointer_id: Some(data.id),
        }),
        InputKind::Touch(_, data) if !data.is_multi_touch() => Some(Contact {
            source: InputSource::Touch,
            position: data.position,
            pointer_id: None,
        }),
        InputKind::Mouse(_, data) if data.button == PointerButton::Primary => Some(Contact {
            source: InputSource::Mouse,
            position: data.position,
            pointer_id: None,
        }),
        _ => None,
    }
}

impl<H: SliderHost> Slider<H> {
    pub(crate) fn handle_start(&mut self, event: &InputEvent, now: u64) -> bool {
        if self.paused || self.session.is_some() || !self.laid_out || self.count == 0 {
            return false;
        }
        if self.is_ignored(event) {
            log::debug!("gesture start on ignored target");
            return false;
        }
        let Some(contact) = contact(event) else {
            return false;
        };

        self.begin_session(GestureSession::begin(
            contact.source,
            contact.position,
            now,
            contact.pointer_id,
        ));
        true
    }

    pub(crate) fn handle_move(&mut self, event: &InputEvent, _now: u64) -> bool {
        let Some(contact) = contact(event) else {
            return false;
        };
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !belongs_to(session, &contact) {
            return false;
        }

        session.track(contact.position);
        self.advance_session(Some(event));
        true
    }

    pub(crate) fn handle_end(&mut self, event: &InputEvent, now: u64) -> bool {
        self.end_from_event(event, now, true)
    }

    /// A cancel that never moved only cleans up.
    pub(crate) fn handle_cancel(&mut self, event: &InputEvent, now: u64) -> bool {
        let moved = self.session.as_ref().is_some_and(GestureSession::has_moved);
        self.end_from_event(event, now, moved)
    }

    fn end_from_event(&mut self, event: &InputEvent, now: u64, commit: bool) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let owned = match (&event.input, session.source()) {
            (InputKind::Pointer(_, data), InputSource::Pointer) => {
                session.start().pointer_id == Some(data.id)
            }
            (InputKind::Touch(..), InputSource::Touch) => true,
            (InputKind::Mouse(..), InputSource::Mouse) => true,
            _ => false,
        };
        if !owned {
            return false;
        }

        self.finish_session(now, commit);
        true
    }

    /// Opens `session`, attaches its move/end listeners and announces the drag.
    pub(crate) fn begin_session(&mut self, session: GestureSession) {
        let source = session.source();
        log::debug!("gesture session opened from {source:?} at slide {}", self.index);
        self.session = Some(session);

        if source != InputSource::Wheel {
            let spec = ListenerSpec::session(source, self.passive_listeners());
            self.host.attach_listeners(&spec);
            self.session_spec = Some(spec);
        }
        self.notify_drag_start();
    }

    /// Locks the axis on the first movement, then renders the drag.
    pub(crate) fn advance_session(&mut self, event: Option<&InputEvent>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(axis) = session.lock_axis() {
            log::debug!("gesture axis locked: {axis:?}");
            if axis == AxisLock::Horizontal && session.source() == InputSource::Pointer {
                if let Some(id) = session.start().pointer_id {
                    session.mark_captured(id);
                    self.host.set_pointer_capture(id);
                }
            }
        }

        if session.is_vertical_scroll() {
            if self.config.disable_scroll {
                self.suppress_default(event);
            }
            return;
        }

        let delta_x = session.delta().x;
        self.suppress_default(event);
        self.notify_move();
        self.render_drag(delta_x);
    }

    /// Shows the active slide and its neighbours following `delta_x`.
    pub(crate) fn render_drag(&mut self, delta_x: f32) {
        let offset = resisted_offset(delta_x, self.width, self.index, self.count);
        log::trace!("drag {delta_x} rendered at {offset}");
        for index in neighbours(self.index, self.count) {
            let rest = self.renderer.rest_offset(index).unwrap_or(0.0);
            self.renderer.translate(&mut self.host, index, offset + rest, 0);
        }
    }

    /// Closes the open session. With `evaluate_swipe` set, a horizontal session
    /// commits or snaps back first.
    pub(crate) fn finish_session(&mut self, now: u64, evaluate_swipe: bool) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        if session.source() == InputSource::Wheel {
            self.wheel_silence.cancel();
            self.wheel.reset();
        }

        if evaluate_swipe && session.is_horizontal() {
            let metrics = SwipeMetrics {
                delta_x: session.delta().x,
                duration_ms: session.duration_ms(now),
                width: self.width,
                index: self.index,
                count: self.count,
                axis: session.axis(),
            };
            let outcome = evaluate(&metrics);
            log::debug!(
                "swipe of {}px over {}ms resolved to {outcome:?}",
                metrics.delta_x,
                metrics.duration_ms
            );
            self.apply_outcome(outcome);
        }

        self.release_session(&mut session);
        self.notify_drag_end();
    }

    /// Closes an open session without evaluating it.
    pub(crate) fn abort_session(&mut self) {
        if self.session.is_some() {
            log::debug!("gesture session aborted");
            self.finish_session(0, false);
        }
    }

    /// Releases capture and session listeners held for `session`.
    pub(crate) fn release_session(&mut self, session: &mut GestureSession) {
        if let Some(id) = session.take_capture() {
            self.host.release_pointer_capture(id);
        }
        if self.session_spec.take().is_some() {
            self.host.detach_listeners(ListenerScope::Session);
        }
    }

    fn apply_outcome(&mut self, outcome: SwipeOutcome) {
        let width = self.width;
        let speed = self.config.speed;
        let index = self.index;
        let before = index.checked_sub(1);
        let after = index + 1;

        match outcome {
            SwipeOutcome::CommitNext => {
                if let Some(before) = before {
                    self.renderer.move_slide(&mut self.host, before, -width, 0);
                }
                self.renderer.shift_slide(&mut self.host, index, -width, speed);
                self.renderer.shift_slide(&mut self.host, after, -width, speed);
                self.index = after;
            }
            SwipeOutcome::CommitPrev => {
                self.renderer.move_slide(&mut self.host, after, width, 0);
                self.renderer.shift_slide(&mut self.host, index, width, speed);
                if let Some(before) = before {
                    self.renderer.shift_slide(&mut self.host, before, width, speed);
                    self.index = before;
                }
            }
            SwipeOutcome::SnapBack => {
                if let Some(before) = before {
                    self.renderer.move_slide(&mut self.host, before, -width, speed);
                }
                self.renderer.move_slide(&mut self.host, index, 0.0, speed);
                self.renderer.move_slide(&mut self.host, after, width, speed);
                return;
            }
        }

        self.notify_change(outcome.direction());
    }
}

fn belongs_to(session: &GestureSession, contact: &Contact) -> bool {
    session.source() == contact.source && session.start().pointer_id == contact.pointer_id
}
