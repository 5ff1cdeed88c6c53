use crate::animation::ease::Ease;
use crate::foundation::core::{ElementId, Property};
use crate::foundation::error::{BurstlineError, BurstlineResult};

/// Visual phase a descriptor belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    IntroFade,
    IntroBlur,
    Anticipation,
    Explosion,
    DepthBlur,
    ParticleBurst,
    Drift,
    IngredientFade,
    HeroReveal,
    FinalCaption,
    Preloader,
}

/// Target value of a property tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenValue {
    /// Absolute end value.
    To(f64),
    /// End value relative to the property's value when the tween starts.
    By(f64),
}

impl TweenValue {
    /// Resolve against the value the tween starts from.
    pub fn resolve(self, from: f64) -> f64 {
        match self {
            Self::To(v) => v,
            Self::By(d) => from + d,
        }
    }
}

/// One property change inside a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyDelta {
    pub property: Property,
    pub value: TweenValue,
    /// Value the property jumps to when the tween starts, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
}

impl PropertyDelta {
    pub fn to(property: Property, v: f64) -> Self {
        Self {
            property,
            value: TweenValue::To(v),
            from: None,
        }
    }

    pub fn by(property: Property, d: f64) -> Self {
        Self {
            property,
            value: TweenValue::By(d),
            from: None,
        }
    }

    pub fn from_to(property: Property, from: f64, to: f64) -> Self {
        Self {
            property,
            value: TweenValue::To(to),
            from: Some(from),
        }
    }
}

/// Declarative record of what changes, by how much, when, and how.
///
/// `[start, start + duration]` is the descriptor's active interval on the
/// shared timeline. Descriptors may overlap freely.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenDescriptor {
    pub phase: Phase,
    pub targets: Vec<ElementId>,
    pub deltas: Vec<PropertyDelta>,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl TweenDescriptor {
    pub fn new(phase: Phase, targets: Vec<ElementId>, start: f64, duration: f64) -> Self {
        Self {
            phase,
            targets,
            deltas: Vec::new(),
            start,
            duration,
            ease: Ease::default(),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delta(mut self, delta: PropertyDelta) -> Self {
        self.deltas.push(delta);
        self
    }

    pub fn to(self, property: Property, v: f64) -> Self {
        self.delta(PropertyDelta::to(property, v))
    }

    pub fn by(self, property: Property, d: f64) -> Self {
        self.delta(PropertyDelta::by(property, d))
    }

    /// End of the active interval.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn targets_element(&self, id: ElementId) -> bool {
        self.targets.contains(&id)
    }

    pub fn validate(&self) -> BurstlineResult<()> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(BurstlineError::validation(format!(
                "{:?} descriptor start must be finite and >= 0",
                self.phase
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(BurstlineError::validation(format!(
                "{:?} descriptor duration must be finite and >= 0",
                self.phase
            )));
        }
        Ok(())
    }
}
