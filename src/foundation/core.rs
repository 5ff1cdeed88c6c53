use crate::foundation::error::{BurstlineError, BurstlineResult};

pub use kurbo::Vec2;

/// Opaque handle to an element owned by a render surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// The part an element plays in the sequence.
///
/// Surfaces are queried by role, the way the page is queried by selector.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Dispersal-animated foreground object.
    Ingredient,
    /// The single focal element the sequence builds toward.
    Hero,
    /// Caption visible at rest, faded out first.
    IntroCaption,
    /// Caption revealed at the end.
    FinalCaption,
    /// Parent for generated particles.
    ParticleContainer,
    /// Generated decorative particle.
    Particle,
    /// Loading overlay dismissed on page ready.
    Preloader,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Ingredient,
        Role::Hero,
        Role::IntroCaption,
        Role::FinalCaption,
        Role::ParticleContainer,
        Role::Particle,
        Role::Preloader,
    ];
}

/// Animatable visual attribute.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal offset as a percentage of the element's own width.
    XPercent,
    /// Vertical offset as a percentage of the element's own height.
    YPercent,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotation,
    /// Uniform scale.
    Scale,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Blur radius in pixels.
    Blur,
    /// Contrast filter multiplier.
    Contrast,
    /// Saturation filter multiplier.
    Saturation,
}

/// Full visual attribute set of one element at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    pub x_percent: f64,
    pub y_percent: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
    pub contrast: f64,
    pub saturation: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x_percent: 0.0,
            y_percent: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            blur: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

impl VisualState {
    /// Read a single property.
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::XPercent => self.x_percent,
            Property::YPercent => self.y_percent,
            Property::Y => self.y,
            Property::Rotation => self.rotation,
            Property::Scale => self.scale,
            Property::Opacity => self.opacity,
            Property::Blur => self.blur,
            Property::Contrast => self.contrast,
            Property::Saturation => self.saturation,
        }
    }

    /// Write a single property.
    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::XPercent => &mut self.x_percent,
            Property::YPercent => &mut self.y_percent,
            Property::Y => &mut self.y,
            Property::Rotation => &mut self.rotation,
            Property::Scale => &mut self.scale,
            Property::Opacity => &mut self.opacity,
            Property::Blur => &mut self.blur,
            Property::Contrast => &mut self.contrast,
            Property::Saturation => &mut self.saturation,
        };
        *slot = value;
    }

    /// Builder-style [`VisualState::set`].
    pub fn with(mut self, property: Property, value: f64) -> Self {
        self.set(property, value);
        self
    }

    /// Percent offset as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x_percent, self.y_percent)
    }
}

/// Closed scalar interval used for sampling bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate interval holding a single value.
    pub const fn exactly(v: f64) -> Self {
        Self { min: v, max: v }
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Return `true` when `v` lies in `[min, max]`.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Map a unit sample `u` in `[0, 1)` into the interval.
    pub fn lerp(self, u: f64) -> f64 {
        self.min + self.span() * u
    }

    /// Check that both ends are finite and ordered.
    pub fn validate(self, what: &str) -> BurstlineResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BurstlineError::validation(format!(
                "{what} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(BurstlineError::validation(format!(
                "{what} bounds must satisfy min <= max"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
