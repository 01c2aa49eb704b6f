//! Programmatic control: navigation, slide insertion and teardown.

use crate::host::{InsertPosition, SliderHost};
use crate::slider::{FrameTask, Slider};
use glissando_foundation::{Direction, ListenerScope};

impl<H: SliderHost> Slider<H> {
    /// Animates to slide `to`, wrapping it into the collection.
    ///
    /// Slides between the current and target index jump ahead of the
    /// animation so the two animated slides meet edge to edge. `speed`
    /// overrides the configured duration. `on_change` follows on the next frame.
    pub fn slide(&mut self, to: usize, speed: Option<u64>) {
        if self.count == 0 || !self.laid_out {
            return;
        }
        if self.session.is_some() {
            log::debug!("slide({to}) ignored during a gesture");
            return;
        }
        let to = to % self.count;
        let from = self.index;
        if to == from {
            return;
        }

        let direction = Direction::between(from, to);
        let offset = self.width * direction.signum() as f32;
        let speed = speed.unwrap_or(self.config.speed);

        for index in from.min(to) + 1..from.max(to) {
            self.renderer.move_slide(&mut self.host, index, offset, 0);
        }
        self.renderer.move_slide(&mut self.host, from, offset, speed);
        self.renderer.move_slide(&mut self.host, to, 0.0, speed);
        self.index = to;
        log::debug!("slide {from} -> {to} ({direction:?})");

        self.frames
            .with_next_frame(FrameTask::NotifyChange { index: to, direction });
        self.host.request_frame();
    }

    /// Steps back one slide. No-op on the first slide.
    pub fn prev(&mut self) {
        if self.index > 0 {
            self.slide(self.index - 1, None);
        }
    }

    /// Steps forward one slide. No-op on the last slide.
    pub fn next(&mut self) {
        if self.index + 1 < self.count {
            self.slide(self.index + 1, None);
        }
    }

    /// Index of the active slide.
    pub fn get_pos(&self) -> usize {
        self.index
    }

    pub fn get_num_slides(&self) -> usize {
        self.count
    }

    /// Jumps to `index` (clamped) and lays out again. No notifications fire.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
        self.start_pending = false;
        self.setup(None);
    }

    pub fn append_slide(&mut self, node: H::Node) {
        self.host.insert_slide(InsertPosition::Back, node);
        self.setup(None);
    }

    /// Inserts a slide before the first; the active slide stays active.
    pub fn prepend_slide(&mut self, node: H::Node) {
        self.host.insert_slide(InsertPosition::Front, node);
        if self.count > 0 {
            self.index += 1;
        }
        self.setup(None);
    }

    /// Fires `on_transition_end` when `slide` is the active one.
    pub fn transition_end(&mut self, slide: usize) -> bool {
        if self.killed || slide != self.index {
            return false;
        }
        self.notify_transition_end();
        true
    }

    /// Tears the slider down: styles reverted, listeners detached, timers and
    /// queued frame work dropped. Calling it again does nothing.
    ///
    /// An open session is released without `on_drag_end`. A later
    /// [`setup`](Self::setup) brings the slider back.
    pub fn kill(&mut self) {
        if self.killed {
            return;
        }
        self.killed = true;

        if let Some(mut session) = self.session.take() {
            self.release_session(&mut session);
        }
        if self.session_spec.take().is_some() {
            self.host.detach_listeners(ListenerScope::Session);
        }
        if self.container_spec.take().is_some() {
            self.host.detach_listeners(ListenerScope::Container);
        }

        self.wheel.reset();
        self.wheel_silence.cancel();
        self.resize.cancel();
        let dropped = self.frames.clear();

        self.release_styles();
        self.renderer.reset(Vec::new());
        log::debug!("slider killed; {dropped} queued frame tasks dropped");
    }
}
