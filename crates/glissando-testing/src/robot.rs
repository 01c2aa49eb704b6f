//! Robot-style driver for headless slider tests.
//!
//! The robot owns a [`Slider`] over a [`RecordingHost`] and a shared
//! [`ManualClock`], and feeds it input the way a host would: one
//! [`InputEvent`] at a time, with time advanced explicitly.
//!
//! ```
//! use glissando::{InputCapabilities, SliderOptions};
//! use glissando_testing::{RecordingHost, SliderRobot};
//!
//! let mut robot = SliderRobot::new(
//!     RecordingHost::new(300.0, 3),
//!     InputCapabilities::pointer_only(),
//!     SliderOptions::new(),
//! );
//! robot.swipe(-200.0, 100);
//! assert_eq!(robot.slider().get_pos(), 1);
//! ```

use crate::clock::ManualClock;
use crate::host::RecordingHost;
use glissando::{InputCapabilities, Slider, SliderOptions};
use glissando_foundation::{
    InputEvent, MouseData, Point, PointerButton, PointerData, PointerId, PointerPhase, PointerType,
    TargetId, TouchData, WheelData, WheelDeltaMode,
};
use std::rc::Rc;

/// Where drags start unless a test says otherwise.
pub const DRAG_ORIGIN: Point = Point::new(150.0, 100.0);

pub const PRIMARY_POINTER: PointerId = 1;

pub struct SliderRobot {
    slider: Slider<RecordingHost>,
    clock: Rc<ManualClock>,
    cursor: Point,
}

impl SliderRobot {
    /// Builds a slider that lays out immediately, with the clock at zero.
    pub fn new(
        host: RecordingHost,
        capabilities: InputCapabilities,
        options: SliderOptions<String>,
    ) -> Self {
        let clock = Rc::new(ManualClock::new(0));
        let slider = Slider::new(host, capabilities, options).with_clock(Rc::clone(&clock));
        Self::from_parts(slider, clock)
    }

    /// Builds a slider whose first layout waits for [`frame`](Self::frame).
    pub fn deferred(
        host: RecordingHost,
        capabilities: InputCapabilities,
        options: SliderOptions<String>,
    ) -> Self {
        let clock = Rc::new(ManualClock::new(0));
        let slider =
            Slider::new_deferred(host, capabilities, options).with_clock(Rc::clone(&clock));
        Self::from_parts(slider, clock)
    }

    fn from_parts(slider: Slider<RecordingHost>, clock: Rc<ManualClock>) -> Self {
        Self {
            slider,
            clock,
            cursor: DRAG_ORIGIN,
        }
    }

    pub fn slider(&self) -> &Slider<RecordingHost> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider<RecordingHost> {
        &mut self.slider
    }

    pub fn host(&self) -> &RecordingHost {
        self.slider.host()
    }

    pub fn host_mut(&mut self) -> &mut RecordingHost {
        self.slider.host_mut()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn now(&self) -> u64 {
        use glissando_core::Clock;
        self.clock.now_millis()
    }

    /// Moves time forward and fires whatever timers fell due.
    pub fn advance(&mut self, millis: u64) -> bool {
        self.clock.advance(millis);
        self.slider.tick()
    }

    /// Runs one frame of queued work.
    pub fn frame(&mut self) {
        self.slider.on_frame();
    }

    /// Dispatches `event` and hands it back for default/propagation checks.
    pub fn send(&mut self, event: InputEvent) -> InputEvent {
        self.slider.handle_event(&event);
        event
    }

    pub fn pointer_down(&mut self, at: Point) -> InputEvent {
        self.cursor = at;
        self.pointer(PointerPhase::Start, at)
    }

    pub fn pointer_move_by(&mut self, dx: f32, dy: f32) -> InputEvent {
        self.cursor = self.cursor + Point::new(dx, dy);
        self.pointer(PointerPhase::Move, self.cursor)
    }

    pub fn pointer_up(&mut self) -> InputEvent {
        self.pointer(PointerPhase::End, self.cursor)
    }

    pub fn pointer_cancel(&mut self) -> InputEvent {
        self.pointer(PointerPhase::Cancel, self.cursor)
    }

    fn pointer(&mut self, phase: PointerPhase, at: Point) -> InputEvent {
        let data = PointerData::primary(PRIMARY_POINTER, PointerType::Touch, at);
        self.send(InputEvent::pointer(phase, data))
    }

    pub fn touch_start(&mut self, at: Point) -> InputEvent {
        self.cursor = at;
        self.send(InputEvent::touch(PointerPhase::Start, TouchData::single(at)))
    }

    pub fn touch_move_by(&mut self, dx: f32, dy: f32) -> InputEvent {
        self.cursor = self.cursor + Point::new(dx, dy);
        self.send(InputEvent::touch(PointerPhase::Move, TouchData::single(self.cursor)))
    }

    pub fn touch_end(&mut self) -> InputEvent {
        let data = TouchData {
            position: self.cursor,
            contacts: 0,
            scale: None,
        };
        self.send(InputEvent::touch(PointerPhase::End, data))
    }

    pub fn mouse_down(&mut self, at: Point, button: PointerButton) -> InputEvent {
        self.cursor = at;
        self.send(InputEvent::mouse(PointerPhase::Start, MouseData { button, position: at }))
    }

    pub fn mouse_move_by(&mut self, dx: f32, dy: f32) -> InputEvent {
        self.cursor = self.cursor + Point::new(dx, dy);
        let data = MouseData {
            button: PointerButton::Primary,
            position: self.cursor,
        };
        self.send(InputEvent::mouse(PointerPhase::Move, data))
    }

    pub fn mouse_up(&mut self) -> InputEvent {
        let data = MouseData {
            button: PointerButton::Primary,
            position: self.cursor,
        };
        self.send(InputEvent::mouse(PointerPhase::End, data))
    }

    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) -> InputEvent {
        self.send(InputEvent::wheel(WheelData::pixels(delta_x, delta_y)))
    }

    pub fn wheel_lines(&mut self, delta_x: f32, delta_y: f32) -> InputEvent {
        self.send(InputEvent::wheel(WheelData {
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Line,
        }))
    }

    pub fn resize(&mut self) -> InputEvent {
        self.send(InputEvent::resize())
    }

    pub fn transition_end(&mut self, slide: usize) -> InputEvent {
        self.send(InputEvent::transition_end(slide))
    }

    /// Presses at [`DRAG_ORIGIN`] on `target`.
    pub fn pointer_down_on(&mut self, target: TargetId) -> InputEvent {
        self.cursor = DRAG_ORIGIN;
        let data = PointerData::primary(PRIMARY_POINTER, PointerType::Touch, DRAG_ORIGIN);
        self.send(InputEvent::pointer(PointerPhase::Start, data).with_target(target))
    }

    /// Horizontal pointer drag of `dx` spread over `duration_ms`, then release.
    ///
    /// The drag moves in four equal steps so axis locking sees a horizontal
    /// first movement.
    pub fn swipe(&mut self, dx: f32, duration_ms: u64) {
        const STEPS: u64 = 4;
        self.pointer_down(DRAG_ORIGIN);
        for _ in 0..STEPS {
            self.clock.advance(duration_ms / STEPS);
            self.pointer_move_by(dx / STEPS as f32, 0.0);
        }
        self.clock.advance(duration_ms % STEPS);
        self.pointer_up();
    }
}
