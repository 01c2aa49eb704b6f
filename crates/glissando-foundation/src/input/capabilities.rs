//! Input capability detection.
//!
//! Detection runs once at startup against a host-provided [`CapabilityProbe`]
//! and produces a plain value. Engines receive that value by reference, so
//! tests can hand them any combination without touching global state.

/// Answers questions about the input modalities the environment offers.
pub trait CapabilityProbe {
    /// Unified pointer events (`pointerdown`/`pointermove`/...) are available.
    fn supports_pointer_events(&self) -> bool;

    /// Legacy touch events (`touchstart`/`touchmove`/...) are available.
    fn supports_touch_events(&self) -> bool;

    /// Listeners can be registered as passive.
    fn supports_passive_listeners(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    pub unified_pointer_input: bool,
    pub legacy_touch: bool,
    pub passive_listeners: bool,
}

impl InputCapabilities {
    pub const fn new(unified_pointer_input: bool, legacy_touch: bool, passive_listeners: bool) -> Self {
        Self {
            unified_pointer_input,
            legacy_touch,
            passive_listeners,
        }
    }

    pub fn detect<P: CapabilityProbe + ?Sized>(probe: &P) -> Self {
        let capabilities = Self::new(
            probe.supports_pointer_events(),
            probe.supports_touch_events(),
            probe.supports_passive_listeners(),
        );
        log::debug!("detected input capabilities: {capabilities:?}");
        capabilities
    }

    pub const fn pointer_only() -> Self {
        Self::new(true, false, false)
    }

    pub const fn touch_only() -> Self {
        Self::new(false, true, false)
    }

    /// Mouse only; drags work when the slider is `draggable`.
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    pub const fn with_passive_listeners(mut self, passive_listeners: bool) -> Self {
        self.passive_listeners = passive_listeners;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        pointer: bool,
        touch: bool,
    }

    impl CapabilityProbe for FixedProbe {
        fn supports_pointer_events(&self) -> bool {
            self.pointer
        }

        fn supports_touch_events(&self) -> bool {
            self.touch
        }
    }

    #[test]
    fn detect_reads_every_probe_answer() {
        let probe = FixedProbe {
            pointer: false,
            touch: true,
        };

        let capabilities = InputCapabilities::detect(&probe);

        assert_eq!(capabilities, InputCapabilities::touch_only());
    }

    #[test]
    fn passive_support_defaults_to_absent() {
        let probe = FixedProbe {
            pointer: true,
            touch: true,
        };

        assert!(!InputCapabilities::detect(&probe).passive_listeners);
    }
}
