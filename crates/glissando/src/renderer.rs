//! Slide positioning.
//!
//! The renderer owns the persisted rest offset of every slide and turns
//! position changes into [`SlideTransform`]s for the host. Drag rendering goes
//! through [`Renderer::translate`] and leaves the rest offsets alone; discrete
//! moves use [`Renderer::move_slide`], which also persists the new offset.

use crate::host::SliderHost;
use glissando_foundation::Easing;
use smallvec::SmallVec;

/// Transition timing plus target offset for one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransform {
    /// Horizontal offset in pixels, relative to the slide's layout position.
    pub offset: f32,
    /// Zero means jump without a transition.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl SlideTransform {
    pub fn new(offset: f32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            offset,
            duration_ms,
            easing,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration_ms == 0
    }

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!("translate({}px, 0) translateZ(0)", self.offset)
    }

    /// CSS `transition` value for the transform property.
    pub fn css_transition(&self) -> String {
        format!(
            "transform {}ms {}",
            self.duration_ms,
            self.easing.css_name()
        )
    }

    /// Interpolated offset `elapsed_ms` into a transition that started at `from`.
    pub fn offset_at(&self, from: f32, elapsed_ms: u64) -> f32 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.offset;
        }
        let fraction = elapsed_ms as f32 / self.duration_ms as f32;
        let eased = self.easing.transform(fraction);
        from + (self.offset - from) * eased
    }
}

/// Indices a drag renders: the active slide and its existing neighbours.
pub fn neighbours(index: usize, count: usize) -> SmallVec<[usize; 3]> {
    let mut indices = SmallVec::new();
    if count == 0 || index >= count {
        return indices;
    }
    if index > 0 {
        indices.push(index - 1);
    }
    indices.push(index);
    if index + 1 < count {
        indices.push(index + 1);
    }
    indices
}

#[derive(Debug, Default)]
pub struct Renderer {
    slide_pos: Vec<f32>,
    easing: Easing,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every rest offset, e.g. after a layout pass.
    pub fn reset(&mut self, rest_offsets: Vec<f32>) {
        self.slide_pos = rest_offsets;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn slide_pos(&self) -> &[f32] {
        &self.slide_pos
    }

    pub fn rest_offset(&self, index: usize) -> Option<f32> {
        self.slide_pos.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.slide_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slide_pos.is_empty()
    }

    /// Shows slide `index` at `offset` without persisting it.
    ///
    /// Returns `false` when `index` is outside the collection.
    pub fn translate<H: SliderHost>(
        &self,
        host: &mut H,
        index: usize,
        offset: f32,
        duration_ms: u64,
    ) -> bool {
        if index >= self.slide_pos.len() {
            return false;
        }
        host.apply_transform(index, SlideTransform::new(offset, duration_ms, self.easing));
        true
    }

    /// Moves slide `index` to `offset` and records it as the new rest offset.
    pub fn move_slide<H: SliderHost>(
        &mut self,
        host: &mut H,
        index: usize,
        offset: f32,
        duration_ms: u64,
    ) -> bool {
        if !self.translate(host, index, offset, duration_ms) {
            return false;
        }
        self.slide_pos[index] = offset;
        true
    }

    /// Moves slide `index` by `by` relative to its rest offset.
    pub fn shift_slide<H: SliderHost>(
        &mut self,
        host: &mut H,
        index: usize,
        by: f32,
        duration_ms: u64,
    ) -> bool {
        match self.rest_offset(index) {
            Some(rest) => self.move_slide(host, index, rest + by, duration_ms),
            None => false,
        }
    }
}
