//! The seam between the engine and whatever owns the real elements.
//!
//! A host wraps a container with one track child whose children are the
//! slides. DOM glue, a native toolkit binding and the recording host used in
//! tests all implement [`SliderHost`].

use crate::layout::LayoutPlan;
use crate::renderer::SlideTransform;
use glissando_foundation::{ListenerScope, ListenerSpec, PointerId, TargetId};

/// Where a new slide goes in the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

pub trait SliderHost {
    /// Handle passed to notifications so collaborators can reach the slide.
    type Slide: Clone;
    /// Content accepted by [`insert_slide`](SliderHost::insert_slide).
    type Node;

    /// Reads the container width. `None` when the container has no track child.
    fn measure(&mut self) -> Option<f32>;

    fn slide_count(&self) -> usize;

    fn slide(&self, index: usize) -> Option<Self::Slide>;

    /// Applies a whole layout pass at once: track width, slide widths,
    /// positions and rest offsets.
    fn apply_layout(&mut self, plan: &LayoutPlan);

    /// Sets transition timing and transform on one slide.
    fn apply_transform(&mut self, index: usize, transform: SlideTransform);

    /// Reverts every style the engine applied.
    fn reset_styles(&mut self);

    fn attach_listeners(&mut self, spec: &ListenerSpec);

    fn detach_listeners(&mut self, scope: ListenerScope);

    fn insert_slide(&mut self, position: InsertPosition, node: Self::Node);

    fn set_pointer_capture(&mut self, _pointer: PointerId) {}

    fn release_pointer_capture(&mut self, _pointer: PointerId) {}

    /// Whether `target` matches the CSS-style `selector`.
    fn target_matches(&self, _target: TargetId, _selector: &str) -> bool {
        false
    }

    /// The engine has next-frame work queued; call [`Slider::on_frame`](crate::Slider::on_frame) soon.
    fn request_frame(&mut self) {}

    /// A timer is armed; call [`Slider::tick`](crate::Slider::tick) at or after `at_millis`.
    fn request_wakeup(&mut self, _at_millis: u64) {}
}
