use std::collections::BTreeMap;

use crate::animation::descriptor::TweenDescriptor;
use crate::animation::ease::Ease;
use crate::foundation::core::{ElementId, Property, VisualState};
use crate::foundation::error::BurstlineResult;

/// Visual state of every element the timeline touches, at one instant.
pub type FrameState = BTreeMap<ElementId, VisualState>;

/// A descriptor's effect on one property of one element, with both ends resolved.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub from: f64,
    pub to: f64,
    pub ease: Ease,
}

impl Segment {
    pub fn sample(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let local = (t - self.start) / self.duration;
        if local <= 0.0 {
            return self.from;
        }
        if local >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(local)
    }
}

fn sample_track(segments: &[Segment], base: f64, t: f64) -> f64 {
    let mut value = base;
    for seg in segments {
        if seg.start > t {
            break;
        }
        value = seg.sample(t);
    }
    value
}

/// Ordered descriptors sharing one time axis, immutable once built.
///
/// Building resolves every descriptor into per-(element, property) segments.
/// A segment starts from its explicit start value when one is given, otherwise
/// from whatever the track shows at that moment (including a still-running
/// earlier segment), otherwise from the element's base state. Relative deltas
/// are resolved against that starting value.
#[derive(Clone, Debug)]
pub struct Timeline {
    base: BTreeMap<ElementId, VisualState>,
    descriptors: Vec<TweenDescriptor>,
    tracks: BTreeMap<(ElementId, Property), Vec<Segment>>,
    total_duration: f64,
}

impl Timeline {
    pub fn new(
        mut base: BTreeMap<ElementId, VisualState>,
        mut descriptors: Vec<TweenDescriptor>,
    ) -> BurstlineResult<Self> {
        for d in &descriptors {
            d.validate()?;
        }
        // Stable: descriptors sharing a start keep insertion order.
        descriptors.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut tracks: BTreeMap<(ElementId, Property), Vec<Segment>> = BTreeMap::new();
        for d in &descriptors {
            for &id in &d.targets {
                let base_state = *base.entry(id).or_default();
                for delta in &d.deltas {
                    let track = tracks.entry((id, delta.property)).or_default();
                    let from = delta.from.unwrap_or_else(|| {
                        sample_track(track.as_slice(), base_state.get(delta.property), d.start)
                    });
                    track.push(Segment {
                        start: d.start,
                        duration: d.duration,
                        from,
                        to: delta.value.resolve(from),
                        ease: d.ease,
                    });
                }
            }
        }

        let total_duration = descriptors
            .iter()
            .map(TweenDescriptor::end)
            .fold(0.0, f64::max);

        Ok(Self {
            base,
            descriptors,
            tracks,
            total_duration,
        })
    }

    /// Latest end over all descriptors; `0` when empty.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Descriptors in timeline order.
    pub fn descriptors(&self) -> &[TweenDescriptor] {
        &self.descriptors
    }

    pub fn base_state(&self, id: ElementId) -> Option<&VisualState> {
        self.base.get(&id)
    }

    /// Every element with a base state, in id order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.base.keys().copied()
    }

    /// Resolved segments for one property of one element.
    pub fn segments(&self, id: ElementId, property: Property) -> &[Segment] {
        self.tracks
            .get(&(id, property))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Clamp `t` onto the timeline; NaN maps to the start.
    pub fn clamp_time(&self, t: f64) -> f64 {
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, self.total_duration)
    }

    /// Single property value at time `t`.
    pub fn value_at(&self, id: ElementId, property: Property, t: f64) -> Option<f64> {
        let base = self.base.get(&id)?.get(property);
        Some(sample_track(
            self.segments(id, property),
            base,
            self.clamp_time(t),
        ))
    }

    /// Full visual state at time `t`. Pure in `t`.
    pub fn evaluate_at(&self, t: f64) -> FrameState {
        let t = self.clamp_time(t);
        let mut out = self.base.clone();
        for ((id, property), segments) in &self.tracks {
            if let Some(state) = out.get_mut(id) {
                state.set(*property, sample_track(segments, state.get(*property), t));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
