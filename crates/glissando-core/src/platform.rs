//! Platform abstraction traits for Glissando runtime services.
//!
//! The slider engine never reads the wall clock on its own. Hosts hand it a
//! [`Clock`], which keeps timing deterministic under test and lets native and
//! wasm embeddings share one code path.

use std::rc::Rc;
use web_time::{Duration, Instant};

/// Provides timing information for the engine.
pub trait Clock {
    /// Returns the current time in milliseconds since a fixed, clock-specific origin.
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Clock implementation backed by [`web_time::Instant`].
///
/// `web_time` resolves to `std::time` on native targets and to
/// `performance.now()` on wasm, so the same clock works in both.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    /// Creates a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Returns the elapsed time since the origin as a [`Duration`].
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }

    #[test]
    fn rc_clock_forwards_to_inner() {
        let clock: Rc<dyn Clock> = Rc::new(StdClock::new());
        assert!(clock.now_millis() < 1_000);
    }
}
