use crate::foundation::core::Bounds;
use crate::foundation::error::{BurstlineError, BurstlineResult};
use crate::foundation::rng::RandomSource;

/// Target transform of one ingredient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DestinationSpec {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl DestinationSpec {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(offset_x: f64, offset_y: f64, rotation: f64, scale: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            rotation,
            scale,
        }
    }
}

/// Sampling bounds for ingredients beyond the fixed table.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FallbackBounds {
    pub offset_x: Bounds,
    pub offset_y: Bounds,
    pub rotation: Bounds,
    pub scale: Bounds,
}

impl FallbackBounds {
    pub fn contains(&self, spec: &DestinationSpec) -> bool {
        self.offset_x.contains(spec.offset_x)
            && self.offset_y.contains(spec.offset_y)
            && self.rotation.contains(spec.rotation)
            && self.scale.contains(spec.scale)
    }
}

/// Per-index ingredient destinations.
///
/// Indices inside `entries` always map to the same literal spec. Indices past the
/// end draw a fresh spec from `fallback` on every call, so only their bounds are
/// reproducible.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DestinationTable {
    pub entries: Vec<DestinationSpec>,
    pub fallback: FallbackBounds,
}

impl DestinationTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The literal entry for `index`, if the table has one.
    pub fn fixed(&self, index: usize) -> Option<DestinationSpec> {
        self.entries.get(index).copied()
    }

    pub fn destination_for<R: RandomSource + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> DestinationSpec {
        if let Some(spec) = self.fixed(index) {
            return spec;
        }
        let b = &self.fallback;
        DestinationSpec {
            offset_x: rng.sample(b.offset_x),
            offset_y: rng.sample(b.offset_y),
            rotation: rng.sample(b.rotation),
            scale: rng.sample(b.scale),
        }
    }

    pub fn validate(&self) -> BurstlineResult<()> {
        let b = &self.fallback;
        b.offset_x.validate("fallback offset_x")?;
        b.offset_y.validate("fallback offset_y")?;
        b.rotation.validate("fallback rotation")?;
        b.scale.validate("fallback scale")?;
        for (i, e) in self.entries.iter().enumerate() {
            let finite = [e.offset_x, e.offset_y, e.rotation, e.scale]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(BurstlineError::validation(format!(
                    "destination entry {i} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/destinations.rs"]
mod tests;
