//! In-memory [`SliderHost`] that records everything the engine asks of it.

use glissando::{InsertPosition, LayoutPlan, SlideTransform, SliderHost};
use glissando_foundation::{EventKind, ListenerScope, ListenerSpec, PointerId, TargetId};

/// Slides are plain labels; inserted nodes are labels too.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Container width, or `None` to act as a container without a track.
    pub width: Option<f32>,
    pub slides: Vec<String>,
    /// Every layout pass, in order.
    pub layouts: Vec<LayoutPlan>,
    /// Every transform applied, in order.
    pub transforms: Vec<(usize, SlideTransform)>,
    /// Listener sets currently attached.
    pub attached: Vec<ListenerSpec>,
    pub attach_count: usize,
    pub detach_count: usize,
    pub captured: Option<PointerId>,
    pub capture_count: usize,
    pub reset_count: usize,
    pub frame_requests: usize,
    pub wakeups: Vec<u64>,
    /// `(target, selector)` pairs that match.
    pub matching_targets: Vec<(TargetId, String)>,
    offsets: Vec<Option<f32>>,
}

impl RecordingHost {
    /// A container `width` wide holding `count` slides labelled `slide-0`, `slide-1`, ...
    pub fn new(width: f32, count: usize) -> Self {
        Self {
            width: Some(width),
            slides: (0..count).map(|i| format!("slide-{i}")).collect(),
            ..Self::default()
        }
    }

    pub fn without_track() -> Self {
        Self::default()
    }

    /// Makes `target` match `selector`.
    pub fn with_matching_target(mut self, target: TargetId, selector: impl Into<String>) -> Self {
        self.matching_targets.push((target, selector.into()));
        self
    }

    /// The offset slide `index` currently shows, from the latest layout or transform.
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied().flatten()
    }

    pub fn offsets(&self) -> Vec<Option<f32>> {
        self.offsets.clone()
    }

    pub fn last_transform(&self, index: usize) -> Option<SlideTransform> {
        self.transforms
            .iter()
            .rev()
            .find(|(slide, _)| *slide == index)
            .map(|(_, transform)| *transform)
    }

    pub fn last_layout(&self) -> Option<&LayoutPlan> {
        self.layouts.last()
    }

    /// Returns and clears the recorded transforms.
    pub fn take_transforms(&mut self) -> Vec<(usize, SlideTransform)> {
        std::mem::take(&mut self.transforms)
    }

    pub fn is_attached(&self, scope: ListenerScope) -> bool {
        self.attached.iter().any(|spec| spec.scope == scope)
    }

    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.attached.iter().any(|spec| spec.contains(kind))
    }

    pub fn spec(&self, scope: ListenerScope) -> Option<&ListenerSpec> {
        self.attached.iter().find(|spec| spec.scope == scope)
    }
}

impl SliderHost for RecordingHost {
    type Slide = String;
    type Node = String;

    fn measure(&mut self) -> Option<f32> {
        self.width
    }

    fn slide_count(&self) -> usize {
        if self.width.is_some() {
            self.slides.len()
        } else {
            0
        }
    }

    fn slide(&self, index: usize) -> Option<String> {
        self.slides.get(index).cloned()
    }

    fn apply_layout(&mut self, plan: &LayoutPlan) {
        self.offsets = plan.slides.iter().map(|slide| Some(slide.rest_offset)).collect();
        self.layouts.push(plan.clone());
    }

    fn apply_transform(&mut self, index: usize, transform: SlideTransform) {
        if let Some(offset) = self.offsets.get_mut(index) {
            *offset = Some(transform.offset);
        }
        self.transforms.push((index, transform));
    }

    fn reset_styles(&mut self) {
        self.reset_count += 1;
        self.offsets = vec![None; self.slides.len()];
    }

    fn attach_listeners(&mut self, spec: &ListenerSpec) {
        self.attached.retain(|attached| attached.scope != spec.scope);
        self.attached.push(spec.clone());
        self.attach_count += 1;
    }

    fn detach_listeners(&mut self, scope: ListenerScope) {
        self.attached.retain(|attached| attached.scope != scope);
        self.detach_count += 1;
    }

    fn insert_slide(&mut self, position: InsertPosition, node: String) {
        match position {
            InsertPosition::Front => self.slides.insert(0, node),
            InsertPosition::Back => self.slides.push(node),
        }
    }

    fn set_pointer_capture(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
        self.capture_count += 1;
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn target_matches(&self, target: TargetId, selector: &str) -> bool {
        self.matching_targets
            .iter()
            .any(|(candidate, matching)| *candidate == target && matching == selector)
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn request_wakeup(&mut self, at_millis: u64) {
        self.wakeups.push(at_millis);
    }
}
