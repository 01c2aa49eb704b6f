//! One-shot next-frame work.
//!
//! Hosts drive frames: after painting they call the owner's frame hook, which
//! drains the queue. Work queued while a batch is running waits for the
//! following frame.

/// Queue of tasks that run once on the next frame.
#[derive(Debug)]
pub struct FrameQueue<T> {
    pending: Vec<T>,
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queues `task` for the next frame.
    pub fn with_next_frame(&mut self, task: T) {
        self.pending.push(task);
    }

    /// Drops every queued task. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every task queued so far, in queue order.
    pub fn drain(&mut self) -> Vec<T> {
        std::mem::take(&mut self.pending)
    }
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
