use serde::Serialize;

use crate::features::points::models::{PointId, PointOfInterest};
use crate::features::points::services::PointStore;

/// Detail-view state: nothing open, or one point open by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum Selection {
    Idle,
    Viewing(PointId),
}

/// Holds a non-owning pointer to the point in detail view.
///
/// Reads resolve against the store, so a pointer to a deleted record is
/// reported as [`Selection::Idle`] even if nobody cleared it.
#[derive(Debug)]
pub struct SelectionController {
    state: Selection,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            state: Selection::Idle,
        }
    }
}

impl SelectionController {
    pub fn select(&mut self, point: &PointOfInterest) {
        self.state = Selection::Viewing(point.id);
    }

    pub fn clear(&mut self) {
        self.state = Selection::Idle;
    }

    pub fn is_viewing(&self, id: PointId) -> bool {
        self.state == Selection::Viewing(id)
    }

    /// Current state, with a dangling pointer reported as idle
    pub fn state(&self, store: &PointStore) -> Selection {
        match self.state {
            Selection::Viewing(id) if store.contains(id) => Selection::Viewing(id),
            _ => Selection::Idle,
        }
    }

    pub fn current<'a>(&self, store: &'a PointStore) -> Option<&'a PointOfInterest> {
        match self.state(store) {
            Selection::Viewing(id) => store.get(id),
            Selection::Idle => None,
        }
    }
}
