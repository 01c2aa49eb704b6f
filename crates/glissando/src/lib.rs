//! Glissando: a headless, gesture-driven slider engine.
//!
//! The engine owns the interaction state of a horizontal slide carousel:
//! layout, drag sessions with edge resistance, the commit rule, wheel input,
//! and programmatic navigation. Everything that touches real elements goes
//! through [`SliderHost`], and time comes from a [`Clock`] the host drives.
//!
//! ```ignore
//! let mut slider = Slider::new(host, InputCapabilities::detect(&probe), SliderOptions::new());
//! slider.handle_event(&event);
//! if let Some(at) = slider.next_deadline() { /* wake up at `at` and call tick() */ }
//! ```

mod controls;
mod gesture;
mod slider;
mod wheel;

pub mod config;
pub mod host;
pub mod layout;
pub mod renderer;

pub use config::{OptionsError, SliderCallbacks, SliderConfig, SliderOptions, DEFAULT_SPEED_MS};
pub use host::{InsertPosition, SliderHost};
pub use layout::{LayoutPlan, SlidePlacement};
pub use renderer::{Renderer, SlideTransform};
pub use slider::Slider;

pub use glissando_core::{Clock, StdClock};
pub use glissando_foundation::{
    Direction, Easing, InputCapabilities, InputEvent, ListenerScope, ListenerSpec,
};

pub mod prelude {
    pub use crate::config::{SliderConfig, SliderOptions};
    pub use crate::host::{InsertPosition, SliderHost};
    pub use crate::layout::LayoutPlan;
    pub use crate::renderer::SlideTransform;
    pub use crate::slider::Slider;
    pub use glissando_foundation::prelude::*;
}
