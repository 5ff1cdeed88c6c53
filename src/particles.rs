//! Particle generation and burst sampling.
//!
//! Particle looks and trajectories are random on purpose: every load differs.
//! Tests pin them through the injected [`RandomSource`].

use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::foundation::core::{Bounds, ElementId, Vec2, VisualState};
use crate::foundation::error::{BurstlineError, BurstlineResult};
use crate::foundation::rng::RandomSource;
use crate::surface::{ParticleStyle, RenderSurface};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleConfig {
    /// Number of particles created at setup.
    pub count: usize,
    /// Width and height bounds in pixels, sampled independently.
    pub size: Bounds,
    /// Radial travel distance bounds, in percent of particle size.
    pub velocity: Bounds,
    /// Per-particle burst duration bounds.
    pub duration: Bounds,
    /// Opacity a particle jumps to when its burst starts.
    pub start_opacity: f64,
    /// Scale a particle jumps to when its burst starts.
    pub start_scale: Bounds,
    #[serde(default)]
    pub ease: Ease,
    pub color: String,
    /// Resting blur, for softness.
    #[serde(default)]
    pub blur: f64,
}

impl ParticleConfig {
    pub fn validate(&self) -> BurstlineResult<()> {
        self.size.validate("particle size")?;
        if self.size.min < 0.0 {
            return Err(BurstlineError::validation(
                "particle size must be non-negative",
            ));
        }
        self.velocity.validate("particle velocity")?;
        self.duration.validate("particle duration")?;
        if self.duration.min <= 0.0 {
            return Err(BurstlineError::validation(
                "particle duration must be > 0",
            ));
        }
        self.start_scale.validate("particle start scale")?;
        if !(0.0..=1.0).contains(&self.start_opacity) {
            return Err(BurstlineError::validation(
                "particle start opacity must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Resting state: invisible, centered, untransformed.
    pub fn rest_state(&self) -> VisualState {
        VisualState {
            opacity: 0.0,
            blur: self.blur,
            ..VisualState::default()
        }
    }
}

/// A generated particle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub id: ElementId,
    pub style: ParticleStyle,
}

/// Create `config.count` particles inside `container`.
///
/// Generation cannot fail. Each particle is given its resting state on creation.
#[tracing::instrument(skip(surface, config, rng), fields(count = config.count))]
pub fn generate_particles<S, R>(
    surface: &mut S,
    container: ElementId,
    config: &ParticleConfig,
    rng: &mut R,
) -> Vec<Particle>
where
    S: RenderSurface + ?Sized,
    R: RandomSource + ?Sized,
{
    let rest = config.rest_state();
    let particles: Vec<Particle> = (0..config.count)
        .map(|_| {
            let style = ParticleStyle {
                width: rng.sample(config.size),
                height: rng.sample(config.size),
                color: config.color.clone(),
            };
            let id = surface.create_particle(container, style.clone());
            surface.apply(id, &rest);
            Particle { id, style }
        })
        .collect();
    tracing::debug!(created = particles.len(), "particles generated");
    particles
}

/// Sampled trajectory of one particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Burst {
    /// End offset in percent, relative to the center.
    pub destination: Vec2,
    pub duration: f64,
    pub start_scale: f64,
}

impl Burst {
    /// Random angle times random velocity, random duration and start scale.
    pub fn sample<R: RandomSource + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let angle = rng.next_f64() * TAU;
        let velocity = rng.sample(config.velocity);
        let duration = rng.sample(config.duration);
        let start_scale = rng.sample(config.start_scale);
        Self {
            destination: Vec2::from_angle(angle) * velocity,
            duration,
            start_scale,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/particles.rs"]
mod tests;
