//! Built-in sequences.
//!
//! `cocoa` is the dense golden-dust burst with a weightless drift. `ember` is a
//! tighter, drift-free burst that reveals a dimmed hero. `citrus` throws
//! ingredients widest with sparse, large particles.

use crate::animation::ease::Ease;
use crate::destinations::{DestinationSpec, DestinationTable, FallbackBounds};
use crate::foundation::core::Bounds;
use crate::foundation::error::{BurstlineError, BurstlineResult};
use crate::particles::ParticleConfig;
use crate::sequence::config::{
    AnticipationConfig, DepthBlur, DriftConfig, ExplosionConfig, FadeConfig, FinalCaptionConfig,
    HeroConfig, HeroReveal, IntroBlurOut, IntroConfig, SequenceConfig, Timing,
};

pub fn names() -> &'static [&'static str] {
    &["cocoa", "ember", "citrus"]
}

pub fn by_name(name: &str) -> BurstlineResult<SequenceConfig> {
    match name {
        "cocoa" => Ok(cocoa()),
        "ember" => Ok(ember()),
        "citrus" => Ok(citrus()),
        other => Err(BurstlineError::config(format!(
            "unknown preset '{other}' (expected one of: {})",
            names().join(", ")
        ))),
    }
}

pub fn cocoa() -> SequenceConfig {
    SequenceConfig {
        name: "cocoa".to_owned(),
        particles: ParticleConfig {
            count: 100,
            size: Bounds::new(1.0, 5.0),
            velocity: Bounds::new(50.0, 250.0),
            duration: Bounds::new(1.0, 3.0),
            start_opacity: 0.8,
            start_scale: Bounds::new(0.0, 0.5),
            ease: Ease::OutExpo,
            color: "#ffd700".to_owned(),
            blur: 1.0,
        },
        destinations: DestinationTable {
            entries: vec![
                DestinationSpec::new(-60.0, -40.0, -60.0, 1.2),
                DestinationSpec::new(60.0, -50.0, 60.0, 0.8),
                DestinationSpec::new(-70.0, 10.0, -120.0, 1.1),
                DestinationSpec::new(75.0, 20.0, 90.0, 0.9),
                DestinationSpec::new(-40.0, 60.0, -160.0, 1.3),
                DestinationSpec::new(50.0, 55.0, 140.0, 1.0),
            ],
            fallback: FallbackBounds {
                offset_x: Bounds::new(-50.0, 50.0),
                offset_y: Bounds::new(-50.0, 50.0),
                rotation: Bounds::new(0.0, 360.0),
                scale: Bounds::exactly(1.0),
            },
        },
        intro: IntroConfig {
            timing: Timing::new(0.0, 1.0, Ease::OutQuad),
            opacity: 0.0,
            scale: 0.8,
            blur_out: Some(IntroBlurOut {
                timing: Timing::new(0.5, 1.0, Ease::OutQuad),
                scale: 1.5,
                blur: 10.0,
            }),
        },
        anticipation: AnticipationConfig {
            timing: Timing::new(0.0, 0.5, Ease::InQuad),
            scale: 0.95,
        },
        explosion: ExplosionConfig {
            timing: Timing::new(0.5, 3.0, Ease::OutQuart),
            distance_multiplier: 2.5,
            rotation_offset: 180.0,
            depth_blur: Some(DepthBlur {
                factor: 10.0,
                threshold: 2.0,
            }),
        },
        drift: Some(DriftConfig {
            timing: Timing::new(3.5, 3.0, Ease::Linear),
            offset_factor: 0.2,
            rotation_factor: 0.1,
        }),
        fade: FadeConfig {
            timing: Timing::new(6.5, 2.0, Ease::OutQuad),
            blur: 20.0,
            scale_delta: 0.2,
        },
        hero: HeroConfig {
            rest_scale: 1.0,
            rest_opacity: 1.0,
            reveal: HeroReveal {
                timing: Timing::new(3.0, 6.0, Ease::InOutCubic),
                scale: 1.8,
                opacity: 1.0,
                y_percent: 10.0,
                rotation: 5.0,
                contrast: 1.2,
                saturation: 1.1,
            },
        },
        final_caption: FinalCaptionConfig {
            timing: Timing::new(8.0, 2.0, Ease::OutCubic),
            rest_y: 40.0,
        },
    }
}

pub fn ember() -> SequenceConfig {
    SequenceConfig {
        name: "ember".to_owned(),
        particles: ParticleConfig {
            count: 60,
            size: Bounds::new(2.0, 8.0),
            velocity: Bounds::new(80.0, 200.0),
            duration: Bounds::new(1.5, 2.5),
            start_opacity: 1.0,
            start_scale: Bounds::new(0.2, 0.6),
            ease: Ease::OutExpo,
            color: "#ff7a1a".to_owned(),
            blur: 0.5,
        },
        destinations: DestinationTable {
            entries: vec![
                DestinationSpec::new(-55.0, -35.0, -45.0, 1.15),
                DestinationSpec::new(55.0, -35.0, 45.0, 0.85),
                DestinationSpec::new(-50.0, 45.0, -135.0, 1.25),
                DestinationSpec::new(50.0, 45.0, 135.0, 0.95),
            ],
            fallback: FallbackBounds {
                offset_x: Bounds::new(-60.0, 60.0),
                offset_y: Bounds::new(-60.0, 60.0),
                rotation: Bounds::new(-180.0, 180.0),
                scale: Bounds::new(0.8, 1.2),
            },
        },
        intro: IntroConfig {
            timing: Timing::new(0.0, 0.8, Ease::OutQuad),
            opacity: 0.0,
            scale: 0.85,
            blur_out: None,
        },
        anticipation: AnticipationConfig {
            timing: Timing::new(0.0, 0.4, Ease::InQuad),
            scale: 0.9,
        },
        explosion: ExplosionConfig {
            timing: Timing::new(0.4, 2.5, Ease::OutQuart),
            distance_multiplier: 2.0,
            rotation_offset: 90.0,
            depth_blur: Some(DepthBlur {
                factor: 8.0,
                threshold: 1.5,
            }),
        },
        drift: None,
        fade: FadeConfig {
            timing: Timing::new(5.0, 2.0, Ease::OutQuad),
            blur: 16.0,
            scale_delta: 0.1,
        },
        hero: HeroConfig {
            rest_scale: 0.95,
            rest_opacity: 0.6,
            reveal: HeroReveal {
                timing: Timing::new(2.5, 6.0, Ease::InOutCubic),
                scale: 1.6,
                opacity: 1.0,
                y_percent: 5.0,
                rotation: -3.0,
                contrast: 1.15,
                saturation: 1.2,
            },
        },
        final_caption: FinalCaptionConfig {
            timing: Timing::new(7.0, 2.0, Ease::OutCubic),
            rest_y: 30.0,
        },
    }
}

pub fn citrus() -> SequenceConfig {
    SequenceConfig {
        name: "citrus".to_owned(),
        particles: ParticleConfig {
            count: 40,
            size: Bounds::new(1.0, 8.0),
            velocity: Bounds::new(60.0, 300.0),
            duration: Bounds::new(1.0, 3.5),
            start_opacity: 0.9,
            start_scale: Bounds::new(0.1, 0.5),
            ease: Ease::OutExpo,
            color: "#ffe066".to_owned(),
            blur: 1.0,
        },
        destinations: DestinationTable {
            entries: vec![
                DestinationSpec::new(-65.0, -45.0, -70.0, 1.2),
                DestinationSpec::new(0.0, -70.0, 20.0, 0.9),
                DestinationSpec::new(65.0, -45.0, 70.0, 1.1),
                DestinationSpec::new(-80.0, 15.0, -110.0, 0.8),
                DestinationSpec::new(80.0, 15.0, 110.0, 1.3),
                DestinationSpec::new(-45.0, 65.0, -150.0, 1.0),
                DestinationSpec::new(0.0, 75.0, 180.0, 1.15),
                DestinationSpec::new(45.0, 65.0, 150.0, 0.85),
            ],
            fallback: FallbackBounds {
                offset_x: Bounds::new(-70.0, 70.0),
                offset_y: Bounds::new(-70.0, 70.0),
                rotation: Bounds::new(0.0, 360.0),
                scale: Bounds::new(0.9, 1.1),
            },
        },
        intro: IntroConfig {
            timing: Timing::new(0.0, 1.0, Ease::OutQuad),
            opacity: 0.0,
            scale: 0.8,
            blur_out: Some(IntroBlurOut {
                timing: Timing::new(0.4, 1.0, Ease::OutQuad),
                scale: 1.3,
                blur: 8.0,
            }),
        },
        anticipation: AnticipationConfig {
            timing: Timing::new(0.0, 0.5, Ease::InQuad),
            scale: 0.93,
        },
        explosion: ExplosionConfig {
            timing: Timing::new(0.5, 3.5, Ease::OutQuart),
            distance_multiplier: 3.0,
            rotation_offset: 180.0,
            depth_blur: None,
        },
        drift: Some(DriftConfig {
            timing: Timing::new(4.0, 2.5, Ease::Linear),
            offset_factor: 0.3,
            rotation_factor: 0.15,
        }),
        fade: FadeConfig {
            timing: Timing::new(6.5, 2.0, Ease::OutQuad),
            blur: 24.0,
            scale_delta: 0.3,
        },
        hero: HeroConfig {
            rest_scale: 1.0,
            rest_opacity: 1.0,
            reveal: HeroReveal {
                timing: Timing::new(3.5, 5.5, Ease::InOutCubic),
                scale: 2.0,
                opacity: 1.0,
                y_percent: 8.0,
                rotation: 4.0,
                contrast: 1.25,
                saturation: 1.15,
            },
        },
        final_caption: FinalCaptionConfig {
            timing: Timing::new(7.5, 2.5, Ease::OutCubic),
            rest_y: 40.0,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/presets.rs"]
mod tests;
