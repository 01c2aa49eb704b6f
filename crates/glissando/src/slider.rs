//! The slider engine shell: state, event dispatch and host-polled timing.

use crate::config::{SliderConfig, SliderOptions};
use crate::host::SliderHost;
use crate::renderer::Renderer;
use glissando_core::{Clock, Debouncer, FrameQueue, SingleSlotTimer, StdClock};
use glissando_foundation::gesture_constants::RESIZE_DEBOUNCE_MS;
use glissando_foundation::{
    Direction, EventKind, GestureSession, InputCapabilities, InputEvent, InputKind, ListenerSpec,
    WheelAccumulator,
};

/// Work deferred to the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameTask {
    InitialLayout,
    NotifyChange { index: usize, direction: Direction },
}

type Handler<H> = fn(&mut Slider<H>, &InputEvent, u64) -> bool;

/// A gesture-driven slider over the slides a [`SliderHost`] exposes.
///
/// The engine is single-threaded and never blocks. Input arrives through
/// [`handle_event`](Self::handle_event); the host drives time by calling
/// [`tick`](Self::tick) at [`next_deadline`](Self::next_deadline) and
/// [`on_frame`](Self::on_frame) while [`needs_frame`](Self::needs_frame).
pub struct Slider<H: SliderHost> {
    pub(crate) host: H,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) capabilities: InputCapabilities,
    pub(crate) config: SliderConfig<H::Slide>,
    pub(crate) renderer: Renderer,
    pub(crate) width: f32,
    pub(crate) index: usize,
    pub(crate) count: usize,
    pub(crate) session: Option<GestureSession>,
    pub(crate) wheel: WheelAccumulator,
    pub(crate) wheel_silence: SingleSlotTimer,
    pub(crate) resize: Debouncer<()>,
    pub(crate) frames: FrameQueue<FrameTask>,
    pub(crate) container_spec: Option<ListenerSpec>,
    pub(crate) session_spec: Option<ListenerSpec>,
    /// The next layout pass takes its index from `config.start_slide`.
    pub(crate) start_pending: bool,
    pub(crate) laid_out: bool,
    pub(crate) paused: bool,
    pub(crate) killed: bool,
}

impl<H: SliderHost> Slider<H> {
    /// Creates a slider and lays it out immediately.
    pub fn new(host: H, capabilities: InputCapabilities, options: SliderOptions<H::Slide>) -> Self {
        let mut slider = Self::unlaid(host, capabilities, options);
        slider.setup(None);
        slider
    }

    /// Creates a slider whose first layout runs on the next frame.
    pub fn new_deferred(
        host: H,
        capabilities: InputCapabilities,
        options: SliderOptions<H::Slide>,
    ) -> Self {
        let mut slider = Self::unlaid(host, capabilities, options);
        slider.queue_initial_layout();
        slider
    }

    /// Replaces the time source. Layout never reads the clock, so this can
    /// follow either constructor.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn unlaid(host: H, capabilities: InputCapabilities, options: SliderOptions<H::Slide>) -> Self {
        Self {
            host,
            clock: Box::new(StdClock::new()),
            capabilities,
            config: SliderConfig::resolve(options),
            renderer: Renderer::new(),
            width: 0.0,
            index: 0,
            count: 0,
            session: None,
            wheel: WheelAccumulator::new(),
            wheel_silence: SingleSlotTimer::new(),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
            frames: FrameQueue::new(),
            container_spec: None,
            session_spec: None,
            start_pending: true,
            laid_out: false,
            paused: false,
            killed: false,
        }
    }

    /// Routes one input event. Returns `true` when the engine acted on it.
    ///
    /// Events of a kind the engine has no listener attached for are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if self.killed {
            return false;
        }
        // Overdue timers resolve before the event sees the state they guard.
        let now = self.clock.now_millis();
        self.fire_due_timers(now);

        let kind = event.kind();
        if !self.listens_to(kind) {
            log::trace!("no listener for {}", kind.dom_name());
            return false;
        }

        let handled = Self::handler(kind)(self, event, now);
        if handled && self.config.stop_propagation {
            event.stop_propagation();
        }
        handled
    }

    fn handler(kind: EventKind) -> Handler<H> {
        match kind {
            EventKind::PointerDown | EventKind::TouchStart | EventKind::MouseDown => {
                Self::handle_start
            }
            EventKind::PointerMove | EventKind::TouchMove | EventKind::MouseMove => {
                Self::handle_move
            }
            EventKind::PointerUp
            | EventKind::PointerLeave
            | EventKind::TouchEnd
            | EventKind::MouseUp
            | EventKind::MouseLeave => Self::handle_end,
            EventKind::PointerCancel | EventKind::TouchCancel => Self::handle_cancel,
            EventKind::Wheel => Self::handle_wheel,
            EventKind::Resize => Self::handle_resize,
            EventKind::TransitionEnd => Self::handle_transition_end,
        }
    }

    fn listens_to(&self, kind: EventKind) -> bool {
        let attached = |spec: &Option<ListenerSpec>| spec.as_ref().is_some_and(|s| s.contains(kind));
        attached(&self.container_spec) || attached(&self.session_spec)
    }

    fn handle_resize(&mut self, _event: &InputEvent, now: u64) -> bool {
        self.schedule_relayout(now);
        true
    }

    fn handle_transition_end(&mut self, event: &InputEvent, _now: u64) -> bool {
        match event.input {
            InputKind::TransitionEnd { slide } => self.transition_end(slide),
            _ => false,
        }
    }

    /// Fires timers that are due: the wheel silence commit and the debounced
    /// relayout. Returns `true` if anything fired.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_millis();
        self.fire_due_timers(now)
    }

    fn fire_due_timers(&mut self, now: u64) -> bool {
        let mut fired = false;

        if self.wheel_silence.fire_if_due(now) {
            log::debug!("wheel went quiet; resolving session");
            self.finish_session(now, true);
            fired = true;
        }
        if self.resize.poll(now).is_some() {
            log::debug!("resize settled; re-running layout");
            self.setup(None);
            fired = true;
        }
        fired
    }

    /// Runs work queued for this frame.
    pub fn on_frame(&mut self) {
        for task in self.frames.drain() {
            match task {
                FrameTask::InitialLayout => self.setup(None),
                FrameTask::NotifyChange { index, direction } => self.emit_change(index, direction),
            }
        }
    }

    /// Earliest timer deadline, in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.wheel_silence.deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.frames.has_pending()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Whether a drag or wheel session is open.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Persisted rest offset of every slide.
    pub fn slide_positions(&self) -> &[f32] {
        self.renderer.slide_pos()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn config(&self) -> &SliderConfig<H::Slide> {
        &self.config
    }

    pub fn capabilities(&self) -> InputCapabilities {
        self.capabilities
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub(crate) fn passive_listeners(&self) -> bool {
        self.config.passive && self.capabilities.passive_listeners
    }

    /// Suppresses the default action unless listeners are passive.
    pub(crate) fn suppress_default(&self, event: Option<&InputEvent>) {
        if self.passive_listeners() {
            return;
        }
        if let Some(event) = event {
            event.prevent_default();
        }
    }

    /// Whether the event started on an element matching the ignore selector.
    pub(crate) fn is_ignored(&self, event: &InputEvent) -> bool {
        match (self.config.ignore_selector.as_deref(), event.target) {
            (Some(selector), Some(target)) => self.host.target_matches(target, selector),
            _ => false,
        }
    }

    /// Reverts applied styles, if any.
    pub(crate) fn release_styles(&mut self) {
        if self.laid_out {
            self.host.reset_styles();
            self.laid_out = false;
        }
    }

    pub(crate) fn notify_change(&mut self, direction: Direction) {
        self.emit_change(self.index, direction);
    }

    fn emit_change(&mut self, index: usize, direction: Direction) {
        let slide = self.host.slide(index);
        if let Some(hook) = self.config.callbacks.on_change.as_mut() {
            hook(index, slide.as_ref(), direction);
        }
    }

    pub(crate) fn notify_drag_start(&mut self) {
        let slide = self.host.slide(self.index);
        if let Some(hook) = self.config.callbacks.on_drag_start.as_mut() {
            hook(self.index, slide.as_ref());
        }
    }

    pub(crate) fn notify_drag_end(&mut self) {
        let slide = self.host.slide(self.index);
        if let Some(hook) = self.config.callbacks.on_drag_end.as_mut() {
            hook(self.index, slide.as_ref());
        }
    }

    pub(crate) fn notify_move(&mut self) {
        if let Some(hook) = self.config.callbacks.on_move.as_mut() {
            hook();
        }
    }

    pub(crate) fn notify_transition_end(&mut self) {
        let slide = self.host.slide(self.index);
        if let Some(hook) = self.config.callbacks.on_transition_end.as_mut() {
            hook(self.index, slide.as_ref());
        }
    }
}
