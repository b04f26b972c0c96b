use crate::surface::CompartmentHit;
use workflow::{AddComponentError, DataflowModel, DropPayload, Pathname};

/// A drop waiting for the user to name the new component.
///
/// Everything the model call needs is captured when the drop happens, so a
/// panel that navigates elsewhere while the prompt is open still adds the
/// component where it was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDrop {
    pub display_name: String,
    pub type_path: String,
    /// Scope the component will be added to.
    pub target: Pathname,
}

impl PendingDrop {
    /// Decide what a drop means.
    ///
    /// Returns `None` for payloads the panel does not accept. The target is
    /// the hit compartment, or `fallback` when nothing was hit.
    pub fn resolve(
        payload: &DropPayload,
        hit: Option<CompartmentHit>,
        fallback: &Pathname,
    ) -> Option<Self> {
        if !payload.is_object_type() {
            return None;
        }
        let target = hit
            .map(|hit| hit.pathname)
            .unwrap_or_else(|| fallback.clone());
        Some(Self {
            display_name: payload.display_name.clone(),
            type_path: payload.type_path.clone(),
            target,
        })
    }

    /// Add the component under `name`.
    ///
    /// A blank name is rejected without touching the model.
    pub fn confirm<M: DataflowModel + ?Sized>(
        &self,
        model: &mut M,
        name: &str,
    ) -> Result<Pathname, AddComponentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddComponentError::EmptyName);
        }
        model.add_component(&self.type_path, name, &self.target)
    }
}
