use std::collections::HashSet;

use crate::features::points::models::{PointId, PointOfInterest};
use crate::features::points::services::CategoryFilterSet;

/// Aggregate counts derived from the current store contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    pub active: usize,
    pub categories: usize,
}

/// Insertion-ordered collection of points, keyed by id
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<PointOfInterest>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: PointId) -> Option<&PointOfInterest> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_qr_code(&self, qr_code: &str) -> Option<&PointOfInterest> {
        self.points.iter().find(|p| p.qr_code == qr_code)
    }

    pub fn qr_code_taken(&self, qr_code: &str) -> bool {
        self.find_by_qr_code(qr_code).is_some()
    }

    /// Replace the record with the same id in place, or append it.
    ///
    /// Returns `true` when the point was newly inserted. Dates are left as given.
    pub fn upsert(&mut self, point: PointOfInterest) -> bool {
        match self.points.iter_mut().find(|p| p.id == point.id) {
            Some(existing) => {
                *existing = point;
                false
            }
            None => {
                self.points.push(point);
                true
            }
        }
    }

    /// Remove a record if present. Absent ids are a no-op.
    pub fn remove(&mut self, id: PointId) -> Option<PointOfInterest> {
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    /// Points accepted by `filters`, in insertion order
    pub fn filtered_by<'a>(
        &'a self,
        filters: &'a CategoryFilterSet,
    ) -> impl Iterator<Item = &'a PointOfInterest> + 'a {
        self.points.iter().filter(move |p| filters.matches(p))
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.len(),
            active: self.points.iter().filter(|p| p.is_active()).count(),
            categories: self
                .points
                .iter()
                .map(|p| p.category)
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}
