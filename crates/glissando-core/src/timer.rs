//! Single-slot deadline timers.
//!
//! Every timer owned by the engine holds at most one pending deadline.
//! Scheduling again replaces the pending deadline; nothing is ever queued
//! behind it. The owner polls with the current time and runs the deferred
//! work itself, so no closure ever captures engine state.

/// A timer slot holding at most one deadline, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleSlotTimer {
    deadline: Option<u64>,
}

impl SingleSlotTimer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the slot to fire `delay_ms` after `now`, replacing any pending deadline.
    ///
    /// Returns the new deadline.
    pub fn schedule(&mut self, now: u64, delay_ms: u64) -> u64 {
        let deadline = now.saturating_add(delay_ms);
        self.deadline = Some(deadline);
        deadline
    }

    /// Disarms the slot. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: u64) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Clears the slot and returns `true` when its deadline has passed.
    pub fn fire_if_due(&mut self, now: u64) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

/// Collapses a burst of signals into one deferred call.
///
/// Each [`signal`](Debouncer::signal) restarts the quiet period and replaces
/// the pending payload. Once `delay_ms` passes without a new signal,
/// [`poll`](Debouncer::poll) yields the latest payload exactly once.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    timer: SingleSlotTimer,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            timer: SingleSlotTimer::new(),
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a signal at `now`, restarting the quiet period. Returns the deadline.
    pub fn signal(&mut self, now: u64, value: T) -> u64 {
        self.pending = Some(value);
        self.timer.schedule(now, self.delay_ms)
    }

    /// Drops the pending call, returning its payload if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.timer.cancel();
        self.pending.take()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Returns the pending payload once the quiet period has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.timer.fire_if_due(now) {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
