//! Scroll progress to visual state.
//!
//! [`ScrubDriver::set_scroll_progress`] is a pure function of progress: the same
//! value always writes the same states, whatever order values arrive in.
//! [`ScrubSmoother`] is the only stateful piece and sits in front of the driver,
//! shaping the progress signal rather than the mapping.

use crate::animation::timeline::{FrameState, Timeline};
use crate::foundation::error::{BurstlineError, BurstlineResult};
use crate::surface::RenderSurface;

/// Clamp progress into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}

/// Linear map from a pixel scroll offset to progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    pub start_px: f64,
    pub end_px: f64,
}

impl ScrollBinding {
    pub fn new(start_px: f64, end_px: f64) -> BurstlineResult<Self> {
        if !start_px.is_finite() || !end_px.is_finite() {
            return Err(BurstlineError::validation(
                "scroll binding bounds must be finite",
            ));
        }
        Ok(Self { start_px, end_px })
    }

    /// From the container's top meeting the viewport top to its bottom meeting
    /// the viewport bottom.
    pub fn for_container(
        container_top: f64,
        container_height: f64,
        viewport_height: f64,
    ) -> BurstlineResult<Self> {
        Self::new(
            container_top,
            container_top + container_height - viewport_height,
        )
    }

    /// Progress for a scroll offset, clamped to `[0, 1]`.
    ///
    /// An empty or inverted range acts as a step at `start_px`.
    pub fn progress(&self, scroll_px: f64) -> f64 {
        if scroll_px.is_nan() {
            return 0.0;
        }
        let span = self.end_px - self.start_px;
        if span <= 0.0 {
            return if scroll_px >= self.start_px { 1.0 } else { 0.0 };
        }
        clamp_progress((scroll_px - self.start_px) / span)
    }
}

/// Applies timeline state to a surface for a given scroll progress.
#[derive(Clone, Debug)]
pub struct ScrubDriver {
    timeline: Timeline,
}

impl ScrubDriver {
    pub fn new(timeline: Timeline) -> Self {
        Self { timeline }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    /// Timeline time for progress `p` (clamped).
    pub fn time_for(&self, p: f64) -> f64 {
        clamp_progress(p) * self.timeline.total_duration()
    }

    /// State implied by progress `p`, without touching any surface.
    pub fn state_at(&self, p: f64) -> FrameState {
        self.timeline.evaluate_at(self.time_for(p))
    }

    /// Write the state implied by `p` to every animated element.
    ///
    /// Returns the clamped progress actually applied.
    pub fn set_scroll_progress<S: RenderSurface + ?Sized>(&self, surface: &mut S, p: f64) -> f64 {
        let p = clamp_progress(p);
        for (id, state) in self.state_at(p) {
            surface.apply(id, &state);
        }
        p
    }

    /// Stop driving; hands the timeline back.
    pub fn detach(self) -> Timeline {
        self.timeline
    }
}

/// Lets displayed progress trail the scroll position.
///
/// Exponential approach with time constant `lag / 4`, so the gap is about 98%
/// closed after `lag` seconds. A non-positive lag disables smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubSmoother {
    lag: f64,
    current: f64,
    target: f64,
}

impl ScrubSmoother {
    const SNAP: f64 = 1e-4;

    pub fn new(lag: f64, initial: f64) -> Self {
        let initial = clamp_progress(initial);
        Self {
            lag: if lag.is_finite() { lag.max(0.0) } else { 0.0 },
            current: initial,
            target: initial,
        }
    }

    pub fn set_target(&mut self, p: f64) {
        self.target = clamp_progress(p);
        if self.lag == 0.0 {
            self.current = self.target;
        }
    }

    /// Advance by `dt` seconds and return the displayed progress.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.lag == 0.0 || !dt.is_finite() {
            self.current = self.target;
            return self.current;
        }
        let dt = dt.max(0.0);
        let alpha = 1.0 - (-dt * 4.0 / self.lag).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < Self::SNAP {
            self.current = self.target;
        }
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
#[path = "../tests/unit/scrub.rs"]
mod tests;
