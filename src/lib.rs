//! Burstline is a scroll-scrubbed timeline sequencer for burst-and-reveal motion.
//!
//! A sequence plays out in phases: the intro caption fades, the hero contracts,
//! ingredients explode outward with a particle burst, drift, fade, and the hero
//! pushes in before the final caption appears. Nothing here draws pixels; the
//! sequencer drives element attributes through a [`RenderSurface`].
//!
//! # Pipeline overview
//!
//! 1. **Generate**: create particles inside the particle container
//! 2. **Build**: `SequenceConfig + Cast -> Timeline` (ordered [`TweenDescriptor`]s)
//! 3. **Scrub**: `progress in [0, 1] -> FrameState`, written to the surface
//!
//! Constraints that hold throughout:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure scrubbing**: state depends only on progress, never on scroll history.
//! - **Injected randomness**: every random draw goes through a [`RandomSource`].
//! - **Graceful degradation**: missing elements drop their descriptors, nothing more.
#![forbid(unsafe_code)]

mod animation;
mod destinations;
mod foundation;
mod particles;
mod scrub;
mod sequence;
mod stage;
mod surface;

pub use animation::descriptor::{Phase, PropertyDelta, TweenDescriptor, TweenValue};
pub use animation::ease::Ease;
pub use animation::timeline::{FrameState, Segment, Timeline};
pub use destinations::{DestinationSpec, DestinationTable, FallbackBounds};
pub use foundation::core::{Bounds, ElementId, Property, Role, Vec2, VisualState};
pub use foundation::error::{BurstlineError, BurstlineResult};
pub use foundation::rng::{RandomSource, Rng64, ScriptedRandom, ThreadRandom};
pub use particles::{Burst, Particle, ParticleConfig, generate_particles};
pub use scrub::{ScrollBinding, ScrubDriver, ScrubSmoother, clamp_progress};
pub use sequence::builder::{Cast, PhaseBuilder};
pub use sequence::config::{
    AnticipationConfig, DepthBlur, DriftConfig, ExplosionConfig, FadeConfig, FinalCaptionConfig,
    HeroConfig, HeroReveal, IntroBlurOut, IntroConfig, SequenceConfig, Timing,
};
pub use sequence::presets;
pub use stage::{Loaded, PreloaderFade, Stage, on_load};
pub use surface::{HeadlessElement, HeadlessSurface, ParticleStyle, RenderSurface};
