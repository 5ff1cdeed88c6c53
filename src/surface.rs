//! Render surface collaborator.
//!
//! The sequencer never draws. It finds elements by [`Role`], creates particles
//! inside a container, and pushes [`VisualState`]s. [`HeadlessSurface`] keeps all
//! of that in memory for tests and the CLI.

use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Role, VisualState};

/// Appearance fixed at particle creation time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleStyle {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// CSS-style color of the radial fill.
    pub color: String,
}

/// Capabilities the sequencer needs from whatever actually renders.
pub trait RenderSurface {
    /// Every element with `role`, in document order.
    fn query_all(&self, role: Role) -> Vec<ElementId>;

    /// First element with `role`, if any.
    fn query_one(&self, role: Role) -> Option<ElementId> {
        self.query_all(role).into_iter().next()
    }

    /// Append a new particle to `container`.
    fn create_particle(&mut self, container: ElementId, style: ParticleStyle) -> ElementId;

    /// Replace the visual attributes of `id`. Unknown ids are ignored.
    fn apply(&mut self, id: ElementId, state: &VisualState);

    /// Detach and drop `id`. Unknown ids are ignored.
    fn remove(&mut self, id: ElementId);
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeadlessElement {
    pub role: Role,
    pub parent: Option<ElementId>,
    pub state: VisualState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ParticleStyle>,
}

/// In-memory surface.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    elements: BTreeMap<ElementId, HeadlessElement>,
    next_id: u32,
    applies: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with the full cast: hero, both captions, a particle container,
    /// a preloader and `ingredients` ingredients.
    pub fn with_stage(ingredients: usize) -> Self {
        Self::with_roles(ingredients, &Role::ALL)
    }

    /// Like [`HeadlessSurface::with_stage`], limited to the singleton roles in `present`.
    pub fn with_roles(ingredients: usize, present: &[Role]) -> Self {
        let mut s = Self::new();
        for role in [
            Role::Preloader,
            Role::IntroCaption,
            Role::Hero,
            Role::ParticleContainer,
            Role::FinalCaption,
        ] {
            if present.contains(&role) {
                s.add(role);
            }
        }
        for _ in 0..ingredients {
            s.add(Role::Ingredient);
        }
        s
    }

    /// Append a top-level element with default visual state.
    pub fn add(&mut self, role: Role) -> ElementId {
        self.insert(role, None, None)
    }

    fn insert(
        &mut self,
        role: Role,
        parent: Option<ElementId>,
        style: Option<ParticleStyle>,
    ) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            HeadlessElement {
                role,
                parent,
                state: VisualState::default(),
                style,
            },
        );
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&HeadlessElement> {
        self.elements.get(&id)
    }

    pub fn state(&self, id: ElementId) -> Option<&VisualState> {
        self.elements.get(&id).map(|e| &e.state)
    }

    pub fn count(&self, role: Role) -> usize {
        self.elements.values().filter(|e| e.role == role).count()
    }

    /// Children of `parent`, in creation order.
    pub fn children(&self, parent: ElementId) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, e)| e.parent == Some(parent))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Total number of state writes received.
    pub fn apply_count(&self) -> u64 {
        self.applies
    }

    /// Snapshot of every element.
    pub fn elements(&self) -> &BTreeMap<ElementId, HeadlessElement> {
        &self.elements
    }
}

impl RenderSurface for HeadlessSurface {
    fn query_all(&self, role: Role) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, e)| e.role == role)
            .map(|(id, _)| *id)
            .collect()
    }

    fn create_particle(&mut self, container: ElementId, style: ParticleStyle) -> ElementId {
        self.insert(Role::Particle, Some(container), Some(style))
    }

    fn apply(&mut self, id: ElementId, state: &VisualState) {
        if let Some(e) = self.elements.get_mut(&id) {
            e.state = *state;
            self.applies += 1;
        }
    }

    fn remove(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
