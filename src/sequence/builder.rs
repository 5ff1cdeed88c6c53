//! Phase builder: turns a [`SequenceConfig`] and the discovered cast into a
//! [`Timeline`].
//!
//! Descriptor order and start offsets come straight from the config. A few
//! constraints hold by construction rather than by configuration:
//!
//! - every ingredient's explosion and every particle's burst start at
//!   `explosion.start`;
//! - within a phase all ingredient descriptors share start, duration and ease,
//!   only the destination magnitude varies;
//! - a missing hero or caption drops only the descriptors that target it.

use std::collections::BTreeMap;

use crate::animation::descriptor::{Phase, PropertyDelta, TweenDescriptor};
use crate::animation::timeline::Timeline;
use crate::destinations::DestinationSpec;
use crate::foundation::core::{ElementId, Property, Role, VisualState};
use crate::foundation::error::BurstlineResult;
use crate::foundation::rng::RandomSource;
use crate::particles::Burst;
use crate::sequence::config::{SequenceConfig, Timing};
use crate::surface::RenderSurface;

/// The elements a sequence animates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Cast {
    pub hero: Option<ElementId>,
    pub intro_caption: Option<ElementId>,
    pub final_caption: Option<ElementId>,
    pub ingredients: Vec<ElementId>,
    pub particles: Vec<ElementId>,
}

impl Cast {
    /// Query every role from `surface`. Particles must already exist.
    pub fn discover<S: RenderSurface + ?Sized>(surface: &S) -> Self {
        Self {
            hero: surface.query_one(Role::Hero),
            intro_caption: surface.query_one(Role::IntroCaption),
            final_caption: surface.query_one(Role::FinalCaption),
            ingredients: surface.query_all(Role::Ingredient),
            particles: surface.query_all(Role::Particle),
        }
    }

    fn warn_missing(&self) {
        for (role, id) in [
            (Role::Hero, self.hero),
            (Role::IntroCaption, self.intro_caption),
            (Role::FinalCaption, self.final_caption),
        ] {
            if id.is_none() {
                tracing::warn!(?role, "element not found; skipping its descriptors");
            }
        }
    }
}

fn descriptor(phase: Phase, targets: Vec<ElementId>, timing: &Timing) -> TweenDescriptor {
    TweenDescriptor::new(phase, targets, timing.start, timing.duration).ease(timing.ease)
}

/// Builds the descriptor list for one playthrough.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBuilder<'a> {
    config: &'a SequenceConfig,
}

impl<'a> PhaseBuilder<'a> {
    pub fn new(config: &'a SequenceConfig) -> Self {
        Self { config }
    }

    /// Validate the config, then assemble base states and descriptors.
    #[tracing::instrument(skip_all, fields(sequence = %self.config.name))]
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        cast: &Cast,
        rng: &mut R,
    ) -> BurstlineResult<Timeline> {
        self.config.validate()?;
        cast.warn_missing();
        let descriptors = self.descriptors(cast, rng);
        let timeline = Timeline::new(self.base_states(cast), descriptors)?;
        tracing::debug!(
            descriptors = timeline.descriptors().len(),
            duration = timeline.total_duration(),
            "timeline built"
        );
        Ok(timeline)
    }

    /// Resting state of every cast member before any descriptor runs.
    pub fn base_states(&self, cast: &Cast) -> BTreeMap<ElementId, VisualState> {
        let cfg = self.config;
        let mut base = BTreeMap::new();
        if let Some(id) = cast.intro_caption {
            base.insert(id, VisualState::default());
        }
        if let Some(id) = cast.hero {
            base.insert(
                id,
                VisualState {
                    scale: cfg.hero.rest_scale,
                    opacity: cfg.hero.rest_opacity,
                    ..VisualState::default()
                },
            );
        }
        if let Some(id) = cast.final_caption {
            base.insert(
                id,
                VisualState {
                    opacity: 0.0,
                    y: cfg.final_caption.rest_y,
                    ..VisualState::default()
                },
            );
        }
        let ingredient_rest = VisualState {
            scale: 0.0,
            opacity: 0.0,
            ..VisualState::default()
        };
        for &id in &cast.ingredients {
            base.insert(id, ingredient_rest);
        }
        let particle_rest = cfg.particles.rest_state();
        for &id in &cast.particles {
            base.insert(id, particle_rest);
        }
        base
    }

    /// Descriptors in phase order. Random draws happen ingredient by ingredient,
    /// then particle by particle.
    pub fn descriptors<R: RandomSource + ?Sized>(
        &self,
        cast: &Cast,
        rng: &mut R,
    ) -> Vec<TweenDescriptor> {
        let cfg = self.config;
        let mut out = Vec::new();

        if let Some(id) = cast.intro_caption {
            out.push(
                descriptor(Phase::IntroFade, vec![id], &cfg.intro.timing)
                    .to(Property::Opacity, cfg.intro.opacity)
                    .to(Property::Scale, cfg.intro.scale),
            );
        }

        if let Some(id) = cast.hero {
            out.push(
                descriptor(Phase::Anticipation, vec![id], &cfg.anticipation.timing)
                    .to(Property::Scale, cfg.anticipation.scale),
            );
        }

        self.push_explosion(cast, rng, &mut out);
        self.push_particle_burst(cast, rng, &mut out);
        self.push_drift(cast, &mut out);

        if !cast.ingredients.is_empty() {
            out.push(
                descriptor(
                    Phase::IngredientFade,
                    cast.ingredients.clone(),
                    &cfg.fade.timing,
                )
                .to(Property::Opacity, 0.0)
                .to(Property::Blur, cfg.fade.blur)
                .by(Property::Scale, cfg.fade.scale_delta),
            );
        }

        if let Some(id) = cast.hero {
            let r = &cfg.hero.reveal;
            out.push(
                descriptor(Phase::HeroReveal, vec![id], &r.timing)
                    .to(Property::Scale, r.scale)
                    .to(Property::Opacity, r.opacity)
                    .to(Property::YPercent, r.y_percent)
                    .to(Property::Rotation, r.rotation)
                    .to(Property::Contrast, r.contrast)
                    .to(Property::Saturation, r.saturation),
            );
        }

        if let (Some(id), Some(b)) = (cast.intro_caption, &cfg.intro.blur_out) {
            out.push(
                descriptor(Phase::IntroBlur, vec![id], &b.timing)
                    .to(Property::Opacity, 0.0)
                    .to(Property::Scale, b.scale)
                    .to(Property::Blur, b.blur),
            );
        }

        if let Some(id) = cast.final_caption {
            out.push(
                descriptor(Phase::FinalCaption, vec![id], &cfg.final_caption.timing)
                    .to(Property::Opacity, 1.0)
                    .to(Property::Y, 0.0),
            );
        }

        out
    }

    fn push_explosion<R: RandomSource + ?Sized>(
        &self,
        cast: &Cast,
        rng: &mut R,
        out: &mut Vec<TweenDescriptor>,
    ) {
        let ex = &self.config.explosion;
        let table = &self.config.destinations;
        for (index, &id) in cast.ingredients.iter().enumerate() {
            let dest = table.destination_for(index, rng);
            out.push(
                descriptor(Phase::Explosion, vec![id], &ex.timing)
                    .to(Property::XPercent, dest.offset_x * ex.distance_multiplier)
                    .to(Property::YPercent, dest.offset_y * ex.distance_multiplier)
                    .to(Property::Rotation, dest.rotation + ex.rotation_offset)
                    .to(Property::Scale, dest.scale)
                    .to(Property::Opacity, 1.0),
            );

            if let Some(blur) = ex.depth_blur.and_then(|d| d.amount(dest.scale)) {
                out.push(
                    TweenDescriptor::new(
                        Phase::DepthBlur,
                        vec![id],
                        ex.timing.start,
                        ex.timing.duration,
                    )
                    .to(Property::Blur, blur),
                );
            }
        }
    }

    fn push_particle_burst<R: RandomSource + ?Sized>(
        &self,
        cast: &Cast,
        rng: &mut R,
        out: &mut Vec<TweenDescriptor>,
    ) {
        let p = &self.config.particles;
        let start = self.config.explosion.timing.start;
        for &id in &cast.particles {
            let burst = Burst::sample(p, rng);
            out.push(
                TweenDescriptor::new(Phase::ParticleBurst, vec![id], start, burst.duration)
                    .ease(p.ease)
                    .delta(PropertyDelta::from_to(
                        Property::XPercent,
                        0.0,
                        burst.destination.x,
                    ))
                    .delta(PropertyDelta::from_to(
                        Property::YPercent,
                        0.0,
                        burst.destination.y,
                    ))
                    .delta(PropertyDelta::from_to(
                        Property::Opacity,
                        p.start_opacity,
                        0.0,
                    ))
                    .delta(PropertyDelta::from_to(
                        Property::Scale,
                        burst.start_scale,
                        0.0,
                    )),
            );
        }
    }

    fn push_drift(&self, cast: &Cast, out: &mut Vec<TweenDescriptor>) {
        let Some(drift) = &self.config.drift else {
            return;
        };
        let table = &self.config.destinations;
        for (index, &id) in cast.ingredients.iter().enumerate() {
            // Out-of-table ingredients hold still while the rest drift.
            let d = table.fixed(index).unwrap_or(DestinationSpec::ZERO);
            out.push(
                descriptor(Phase::Drift, vec![id], &drift.timing)
                    .by(Property::XPercent, d.offset_x * drift.offset_factor)
                    .by(Property::YPercent, d.offset_y * drift.offset_factor)
                    .by(Property::Rotation, d.rotation * drift.rotation_factor),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/builder.rs"]
mod tests;
