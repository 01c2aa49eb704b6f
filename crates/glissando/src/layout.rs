//! Layout pass.
//!
//! `setup` reads the container width once, computes a [`LayoutPlan`] and hands
//! the host the whole plan in a single write, so measuring never interleaves
//! with style writes. It also re-attaches the container listeners, which makes
//! it safe to call again after resizes or slide insertions.

use crate::config::{SliderConfig, SliderOptions};
use crate::host::SliderHost;
use crate::slider::{FrameTask, Slider};
use glissando_foundation::{ListenerScope, ListenerSpec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePlacement {
    pub index: usize,
    pub width: f32,
    /// Horizontal position from the track's leading edge (`index · −W`).
    pub left: f32,
    /// Initial transform offset: −W before the active slide, 0 on it, +W after.
    pub rest_offset: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub track_width: f32,
    pub slide_width: f32,
    pub slides: Vec<SlidePlacement>,
}

impl LayoutPlan {
    /// Stacks every slide at the track origin and fans them out by rest offset.
    pub fn compute(count: usize, width: f32, active: usize) -> Self {
        let slides = (0..count)
            .map(|index| SlidePlacement {
                index,
                width,
                left: index as f32 * -width,
                rest_offset: rest_offset(index, active, width),
            })
            .collect();

        Self {
            track_width: 2.0 * count as f32 * width,
            slide_width: width,
            slides,
        }
    }

    pub fn rest_offsets(&self) -> Vec<f32> {
        self.slides.iter().map(|slide| slide.rest_offset).collect()
    }
}

pub fn rest_offset(index: usize, active: usize, width: f32) -> f32 {
    match index.cmp(&active) {
        std::cmp::Ordering::Less => -width,
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Greater => width,
    }
}

impl<H: SliderHost> Slider<H> {
    /// Lays the slides out and (re)attaches input listeners.
    ///
    /// `Some(options)` replaces the configuration wholesale; an explicit
    /// `start_slide` in them also resets the active index.
    pub fn setup(&mut self, options: Option<SliderOptions<H::Slide>>) {
        if let Some(options) = options {
            self.start_pending |= options.start_slide.is_some();
            self.config = SliderConfig::resolve(options);
        }

        self.abort_session();
        self.killed = false;
        if self.container_spec.take().is_some() {
            self.host.detach_listeners(ListenerScope::Container);
        }

        let Some(width) = self.host.measure() else {
            log::warn!("slider container has no track; layout skipped");
            self.count = 0;
            self.renderer.reset(Vec::new());
            self.release_styles();
            return;
        };
        let count = self.host.slide_count();
        self.width = width;
        self.count = count;

        if count == 0 {
            log::debug!("slider has no slides; layout skipped");
            self.renderer.reset(Vec::new());
            self.index = 0;
            self.release_styles();
            return;
        }

        if self.start_pending {
            self.index = self.config.start_slide;
            self.start_pending = false;
        }
        self.index = self.index.min(count - 1);

        let plan = LayoutPlan::compute(count, width, self.index);
        self.host.apply_layout(&plan);
        self.renderer.reset(plan.rest_offsets());
        self.renderer.set_easing(self.config.easing);

        let spec = ListenerSpec::container(
            &self.capabilities,
            self.config.draggable,
            self.config.mousewheel,
            self.passive_listeners(),
        );
        self.host.attach_listeners(&spec);
        self.container_spec = Some(spec);
        self.laid_out = true;

        log::debug!(
            "slider laid out: {count} slides, width {width}, active {}",
            self.index
        );
    }

    /// Records a resize signal; layout re-runs once the signals go quiet.
    pub(crate) fn schedule_relayout(&mut self, now: u64) {
        let at = self.resize.signal(now, ());
        self.host.request_wakeup(at);
    }

    pub(crate) fn queue_initial_layout(&mut self) {
        self.frames.with_next_frame(FrameTask::InitialLayout);
        self.host.request_frame();
    }
}
