//! Core runtime services for the Glissando slider engine: clocks, single-slot
//! timers and the next-frame queue.

pub mod frame_clock;
pub mod platform;
pub mod timer;

pub use frame_clock::FrameQueue;
pub use platform::{Clock, StdClock};
pub use timer::{Debouncer, SingleSlotTimer};
