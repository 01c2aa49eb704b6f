//! Drives a slider through a scripted session and prints what a DOM host
//! would apply. Run with `RUST_LOG=debug` to see the engine's decisions.

use glissando::{
    Clock, InputCapabilities, InputEvent, InsertPosition, LayoutPlan, ListenerScope, ListenerSpec,
    SlideTransform, Slider, SliderHost, SliderOptions,
};
use glissando_foundation::{
    CapabilityProbe, Point, PointerData, PointerId, PointerPhase, PointerType, WheelData,
};
use std::cell::Cell;
use std::rc::Rc;

const OPTIONS: &str = r#"{
    "speed": "300",
    "startSlide": 0,
    "mousewheel": true,
    "theme": "dark"
}"#;

/// Pretends to be a browser with pointer events and passive listeners.
struct ModernBrowser;

impl CapabilityProbe for ModernBrowser {
    fn supports_pointer_events(&self) -> bool {
        true
    }

    fn supports_touch_events(&self) -> bool {
        true
    }

    fn supports_passive_listeners(&self) -> bool {
        true
    }
}

/// Script time: moves only when the script says so, so the output is stable.
#[derive(Default)]
struct ScriptClock {
    now: Cell<u64>,
}

impl ScriptClock {
    fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for ScriptClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Prints every style write instead of touching real elements.
struct ConsoleHost {
    width: f32,
    slides: Vec<String>,
    offsets: Vec<f32>,
}

impl ConsoleHost {
    fn new(width: f32, slides: &[&str]) -> Self {
        Self {
            width,
            slides: slides.iter().map(|s| s.to_string()).collect(),
            offsets: Vec::new(),
        }
    }
}

impl SliderHost for ConsoleHost {
    type Slide = String;
    type Node = String;

    fn measure(&mut self) -> Option<f32> {
        Some(self.width)
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide(&self, index: usize) -> Option<String> {
        self.slides.get(index).cloned()
    }

    fn apply_layout(&mut self, plan: &LayoutPlan) {
        println!("  track width: {}px", plan.track_width);
        self.offsets = plan.rest_offsets();
        for slide in &plan.slides {
            println!(
                "  [{}] width {}px left {}px offset {}px",
                slide.index, slide.width, slide.left, slide.rest_offset
            );
        }
    }

    fn apply_transform(&mut self, index: usize, transform: SlideTransform) {
        let from = self.offsets.get(index).copied().unwrap_or_default();
        let midway = transform.offset_at(from, transform.duration_ms / 2);
        println!(
            "  [{index}] transition: {}; transform: {} (midway {midway:.1}px)",
            transform.css_transition(),
            transform.css_transform()
        );
        if let Some(offset) = self.offsets.get_mut(index) {
            *offset = transform.offset;
        }
    }

    fn reset_styles(&mut self) {
        println!("  styles reset");
        self.offsets.clear();
    }

    fn attach_listeners(&mut self, spec: &ListenerSpec) {
        let names: Vec<_> = spec.kinds.iter().map(|kind| kind.dom_name()).collect();
        println!(
            "  listen {:?} (passive: {}): {}",
            spec.scope,
            spec.options.passive,
            names.join(", ")
        );
    }

    fn detach_listeners(&mut self, scope: ListenerScope) {
        println!("  unlisten {scope:?}");
    }

    fn insert_slide(&mut self, position: InsertPosition, node: String) {
        match position {
            InsertPosition::Front => self.slides.insert(0, node),
            InsertPosition::Back => self.slides.push(node),
        }
    }

    fn set_pointer_capture(&mut self, pointer: PointerId) {
        println!("  capture pointer {pointer}");
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        println!("  release pointer {pointer}");
    }
}

fn pointer(phase: PointerPhase, x: f32) -> InputEvent {
    InputEvent::pointer(
        phase,
        PointerData::primary(1, PointerType::Touch, Point::new(x, 200.0)),
    )
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = match SliderOptions::from_json_str(OPTIONS) {
        Ok(options) => options
            .on_change(|index, slide, direction| {
                println!("> change: {index} {slide:?} {direction:?}")
            })
            .on_drag_start(|index, _| println!("> drag start at {index}"))
            .on_drag_end(|index, _| println!("> drag end at {index}")),
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    let clock = Rc::new(ScriptClock::default());
    let host = ConsoleHost::new(320.0, &["intro", "features", "pricing"]);
    let capabilities = InputCapabilities::detect(&ModernBrowser);

    println!("=== setup ===");
    let mut slider = Slider::new(host, capabilities, options).with_clock(Rc::clone(&clock));
    log::info!("extra options kept: {:?}", slider.config().extra);

    println!("=== swipe left ===");
    slider.handle_event(&pointer(PointerPhase::Start, 300.0));
    for step in 1..=4 {
        clock.advance(30);
        slider.handle_event(&pointer(PointerPhase::Move, 300.0 - 50.0 * step as f32));
    }
    slider.handle_event(&pointer(PointerPhase::End, 100.0));

    println!("=== wheel back ===");
    for _ in 0..6 {
        clock.advance(16);
        slider.handle_event(&InputEvent::wheel(WheelData::pixels(-60.0, 0.0)));
    }
    if let Some(deadline) = slider.next_deadline() {
        clock.set(deadline);
        slider.tick();
    }

    println!("=== jump to last ===");
    slider.slide(2, None);
    slider.on_frame();

    println!("=== prepend ===");
    slider.prepend_slide("welcome".to_owned());
    println!("active slide now {}", slider.get_pos());

    println!("=== kill ===");
    slider.kill();
    println!(
        "done: {} slides, active {}",
        slider.get_num_slides(),
        slider.get_pos()
    );
}
