use std::path::Path;

use crate::animation::ease::Ease;
use crate::destinations::DestinationTable;
use crate::foundation::error::{BurstlineError, BurstlineResult};
use crate::particles::ParticleConfig;

/// Where a phase sits on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub start: f64,
    pub duration: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Timing {
    pub const fn new(start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            start,
            duration,
            ease,
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn midpoint(&self) -> f64 {
        self.start + self.duration / 2.0
    }

    pub fn validate(&self, what: &str) -> BurstlineResult<()> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(BurstlineError::validation(format!(
                "{what} start must be finite and >= 0"
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(BurstlineError::validation(format!(
                "{what} duration must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Intro caption fade at the top of the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroConfig {
    #[serde(flatten)]
    pub timing: Timing,
    pub opacity: f64,
    pub scale: f64,
    /// Second pass that blurs the caption away while it fades.
    #[serde(default)]
    pub blur_out: Option<IntroBlurOut>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroBlurOut {
    #[serde(flatten)]
    pub timing: Timing,
    pub scale: f64,
    pub blur: f64,
}

/// Slight hero contraction before the burst.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnticipationConfig {
    #[serde(flatten)]
    pub timing: Timing,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExplosionConfig {
    /// Shared by every ingredient and every particle.
    #[serde(flatten)]
    pub timing: Timing,
    /// Destination offsets are multiplied by this.
    pub distance_multiplier: f64,
    /// Added to every destination rotation.
    pub rotation_offset: f64,
    #[serde(default)]
    pub depth_blur: Option<DepthBlur>,
}

/// Blur ingredients whose destination scale strays from 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepthBlur {
    pub factor: f64,
    /// Amounts at or below this are skipped.
    pub threshold: f64,
}

impl DepthBlur {
    /// Blur for a destination scale, or `None` when under the threshold.
    pub fn amount(&self, scale: f64) -> Option<f64> {
        let amount = (1.0 - scale).abs() * self.factor;
        (amount > self.threshold).then_some(amount)
    }
}

/// Slow additive motion after the burst peaks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DriftConfig {
    #[serde(flatten)]
    pub timing: Timing,
    /// Fraction of the fixed destination offset added on top of the current offset.
    pub offset_factor: f64,
    /// Fraction of the fixed destination rotation added on top of the current rotation.
    pub rotation_factor: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeConfig {
    #[serde(flatten)]
    pub timing: Timing,
    pub blur: f64,
    /// Added to the current scale.
    pub scale_delta: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroConfig {
    pub rest_scale: f64,
    pub rest_opacity: f64,
    pub reveal: HeroReveal,
}

/// Terminal push-in on the hero subject.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroReveal {
    #[serde(flatten)]
    pub timing: Timing,
    pub scale: f64,
    pub opacity: f64,
    pub y_percent: f64,
    pub rotation: f64,
    pub contrast: f64,
    pub saturation: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FinalCaptionConfig {
    #[serde(flatten)]
    pub timing: Timing,
    /// Resting vertical offset in pixels; animates to 0.
    pub rest_y: f64,
}

/// Everything that distinguishes one burst-and-reveal sequence from another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceConfig {
    pub name: String,
    pub particles: ParticleConfig,
    pub destinations: DestinationTable,
    pub intro: IntroConfig,
    pub anticipation: AnticipationConfig,
    pub explosion: ExplosionConfig,
    #[serde(default)]
    pub drift: Option<DriftConfig>,
    pub fade: FadeConfig,
    pub hero: HeroConfig,
    pub final_caption: FinalCaptionConfig,
}

impl SequenceConfig {
    pub fn from_json_str(s: &str) -> BurstlineResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> BurstlineResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            BurstlineError::config(format!("read sequence config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> BurstlineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> BurstlineResult<()> {
        self.particles.validate()?;
        self.destinations.validate()?;

        self.intro.timing.validate("intro")?;
        if let Some(b) = &self.intro.blur_out {
            b.timing.validate("intro blur-out")?;
        }
        self.anticipation.timing.validate("anticipation")?;
        if !(self.anticipation.scale > 0.0 && self.anticipation.scale <= 1.0) {
            return Err(BurstlineError::validation(
                "anticipation scale must be in (0, 1]",
            ));
        }
        if self.anticipation.scale >= self.hero.rest_scale {
            return Err(BurstlineError::validation(format!(
                "anticipation scale {} must be below the hero rest scale {}",
                self.anticipation.scale, self.hero.rest_scale
            )));
        }

        let explosion = &self.explosion.timing;
        explosion.validate("explosion")?;
        if explosion.start < self.anticipation.timing.start {
            return Err(BurstlineError::validation(
                "explosion must not start before the anticipation",
            ));
        }
        if let Some(drift) = &self.drift {
            drift.timing.validate("drift")?;
            if drift.timing.start <= explosion.start {
                return Err(BurstlineError::validation(
                    "drift must start after the explosion",
                ));
            }
        }

        let reveal = &self.hero.reveal.timing;
        reveal.validate("hero reveal")?;
        self.fade.timing.validate("fade")?;
        if self.fade.timing.start < reveal.start {
            return Err(BurstlineError::validation(
                "ingredient fade must start once the hero reveal is underway",
            ));
        }

        self.final_caption.timing.validate("final caption")?;
        if self.final_caption.timing.start < reveal.midpoint() {
            return Err(BurstlineError::validation(format!(
                "final caption must start no earlier than the hero reveal midpoint ({})",
                reveal.midpoint()
            )));
        }

        let longest_other = [
            Some(self.intro.timing.duration),
            self.intro.blur_out.as_ref().map(|b| b.timing.duration),
            Some(self.anticipation.timing.duration),
            Some(explosion.duration),
            self.drift.as_ref().map(|d| d.timing.duration),
            Some(self.fade.timing.duration),
            Some(self.final_caption.timing.duration),
            Some(self.particles.duration.max),
        ]
        .into_iter()
        .flatten()
        .fold(0.0, f64::max);
        if reveal.duration < longest_other {
            return Err(BurstlineError::validation(format!(
                "hero reveal ({}s) must be the longest phase, found {longest_other}s",
                reveal.duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/config.rs"]
mod tests;
