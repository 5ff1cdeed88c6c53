//! Page-ready lifecycle.
//!
//! Setup runs once and synchronously: particles are generated, the cast is
//! discovered, the timeline is built, and the resting state is written. Only
//! then can scroll progress be applied.

use std::collections::BTreeMap;

use crate::animation::descriptor::{Phase, TweenDescriptor};
use crate::animation::ease::Ease;
use crate::animation::timeline::Timeline;
use crate::foundation::core::{ElementId, Property, Role};
use crate::foundation::error::BurstlineResult;
use crate::foundation::rng::RandomSource;
use crate::particles::{Particle, generate_particles};
use crate::scrub::ScrubDriver;
use crate::sequence::builder::{Cast, PhaseBuilder};
use crate::sequence::config::SequenceConfig;
use crate::surface::RenderSurface;

/// A fully set-up sequence bound to a surface's elements.
#[derive(Clone, Debug)]
pub struct Stage {
    driver: ScrubDriver,
    cast: Cast,
    particles: Vec<Particle>,
}

impl Stage {
    /// One-time setup. Fails only on an invalid config, before touching the surface.
    #[tracing::instrument(skip_all, fields(sequence = %config.name))]
    pub fn setup<S, R>(
        surface: &mut S,
        config: &SequenceConfig,
        rng: &mut R,
    ) -> BurstlineResult<Self>
    where
        S: RenderSurface + ?Sized,
        R: RandomSource + ?Sized,
    {
        config.validate()?;

        let particles = match surface.query_one(Role::ParticleContainer) {
            Some(container) => generate_particles(surface, container, &config.particles, rng),
            None => {
                tracing::warn!("particle container not found; skipping particles");
                Vec::new()
            }
        };

        let mut cast = Cast::discover(surface);
        cast.particles = particles.iter().map(|p| p.id).collect();

        let timeline = PhaseBuilder::new(config).build(&cast, rng)?;
        let driver = ScrubDriver::new(timeline);
        driver.set_scroll_progress(surface, 0.0);

        tracing::debug!(
            ingredients = cast.ingredients.len(),
            particles = cast.particles.len(),
            "stage ready"
        );
        Ok(Self {
            driver,
            cast,
            particles,
        })
    }

    pub fn driver(&self) -> &ScrubDriver {
        &self.driver
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// See [`ScrubDriver::set_scroll_progress`].
    pub fn set_scroll_progress<S: RenderSurface + ?Sized>(&self, surface: &mut S, p: f64) -> f64 {
        self.driver.set_scroll_progress(surface, p)
    }

    pub fn into_driver(self) -> ScrubDriver {
        self.driver
    }
}

/// Wall-clock fade of the loading overlay; removes it when done.
///
/// Runs on its own playhead, independent of scroll.
#[derive(Clone, Debug)]
pub struct PreloaderFade {
    id: ElementId,
    timeline: Timeline,
    elapsed: f64,
    removed: bool,
}

impl PreloaderFade {
    pub const DURATION: f64 = 0.5;

    /// Start dismissing the preloader, if the surface has one.
    pub fn dismiss<S: RenderSurface + ?Sized>(surface: &S) -> Option<Self> {
        let id = surface.query_one(Role::Preloader)?;
        let fade = TweenDescriptor::new(Phase::Preloader, vec![id], 0.0, Self::DURATION)
            .ease(Ease::OutQuad)
            .to(Property::Opacity, 0.0);
        let timeline = Timeline::new(BTreeMap::new(), vec![fade]).ok()?;
        Some(Self {
            id,
            timeline,
            elapsed: 0.0,
            removed: false,
        })
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Advance by `dt` seconds. Returns `true` once the preloader is gone.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, dt: f64) -> bool {
        if self.removed {
            return true;
        }
        if dt.is_finite() {
            self.elapsed += dt.max(0.0);
        }
        if self.elapsed >= self.timeline.total_duration() {
            surface.remove(self.id);
            self.removed = true;
            tracing::debug!(id = self.id.0, "preloader removed");
            return true;
        }
        if let Some(state) = self.timeline.evaluate_at(self.elapsed).get(&self.id) {
            surface.apply(self.id, state);
        }
        false
    }

    pub fn is_finished(&self) -> bool {
        self.removed
    }
}

/// Result of the page-ready event.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub stage: Stage,
    pub preloader: Option<PreloaderFade>,
}

/// Page-ready handler: begin dismissing the preloader and set up the stage.
pub fn on_load<S, R>(
    surface: &mut S,
    config: &SequenceConfig,
    rng: &mut R,
) -> BurstlineResult<Loaded>
where
    S: RenderSurface + ?Sized,
    R: RandomSource + ?Sized,
{
    let preloader = PreloaderFade::dismiss(surface);
    let stage = Stage::setup(surface, config, rng)?;
    Ok(Loaded { stage, preloader })
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
