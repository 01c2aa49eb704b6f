//! Wheel and trackpad input mapped onto gesture sessions.
//!
//! Horizontal wheel deltas accumulate into a synthetic drag. There is no
//! release event, so the session resolves once the wheel has been quiet for
//! [`WHEEL_SILENCE_MS`].

use crate::host::SliderHost;
use crate::slider::Slider;
use glissando_foundation::gesture_constants::WHEEL_SILENCE_MS;
use glissando_foundation::{GestureSession, InputEvent, InputKind, InputSource, Point, WheelAccumulator};

impl<H: SliderHost> Slider<H> {
    pub(crate) fn handle_wheel(&mut self, event: &InputEvent, now: u64) -> bool {
        let InputKind::Wheel(data) = &event.input else {
            return false;
        };
        if self.paused || !self.config.mousewheel || !self.laid_out || self.count == 0 {
            return false;
        }
        if let Some(session) = &self.session {
            if session.source() != InputSource::Wheel {
                return false;
            }
        }
        if !WheelAccumulator::qualifies(data, self.width) {
            return false;
        }

        if self.session.is_none() {
            if self.is_ignored(event) {
                return false;
            }
            self.wheel.reset();
            self.begin_session(GestureSession::begin(
                InputSource::Wheel,
                Point::ZERO,
                now,
                None,
            ));
        }

        let normalized = WheelAccumulator::normalized(data, self.width);
        let delta = self.wheel.accumulate(normalized, self.width);
        if let Some(session) = self.session.as_mut() {
            session.set_delta(delta);
        }

        let deadline = self.wheel_silence.schedule(now, WHEEL_SILENCE_MS);
        self.host.request_wakeup(deadline);

        self.advance_session(Some(event));
        true
    }
}
