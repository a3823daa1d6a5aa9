use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::core::error::AppError;
use crate::features::points::dtos::PointDraftDto;
use crate::features::points::models::{AdminStatus, FieldCondition, PointId, PointOfInterest};
use crate::features::points::services::qr_code::{
    synthesize_qr_code, QrCodeExhausted, RandomSequence, SequenceSource,
};
use crate::features::points::services::{PointStore, SelectionController};
use crate::shared::clock::{Clock, SystemClock};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Invalid point draft: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Point '{0}' not found")]
    NotFound(PointId),

    #[error(transparent)]
    QrCodeExhausted(#[from] QrCodeExhausted),
}

impl From<LifecycleError> for AppError {
    fn from(e: LifecycleError) -> Self {
        match e {
            LifecycleError::Validation(errors) => AppError::InvalidFields(errors),
            LifecycleError::NotFound(_) => AppError::NotFound(e.to_string()),
            LifecycleError::QrCodeExhausted(_) => AppError::Conflict(e.to_string()),
        }
    }
}

pub type LifecycleResult<T> = std::result::Result<T, LifecycleError>;

/// Administrative create/update/delete over a [`PointStore`].
///
/// Every operation validates before touching the store, so a failed call
/// leaves the store exactly as it was.
pub struct AdminLifecycleController {
    clock: Arc<dyn Clock>,
    sequence: Box<dyn SequenceSource>,
}

impl Default for AdminLifecycleController {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Box::new(RandomSequence::new()))
    }
}

impl AdminLifecycleController {
    pub fn new(clock: Arc<dyn Clock>, sequence: Box<dyn SequenceSource>) -> Self {
        Self { clock, sequence }
    }

    fn next_id(store: &PointStore) -> PointId {
        loop {
            let id = Uuid::now_v7();
            if !store.contains(id) {
                return id;
            }
        }
    }

    pub fn create(
        &mut self,
        store: &mut PointStore,
        draft: &PointDraftDto,
    ) -> LifecycleResult<PointOfInterest> {
        let draft = draft.parse()?;
        let qr_code = synthesize_qr_code(
            self.sequence.as_mut(),
            draft.category,
            &draft.name,
            |code| store.qr_code_taken(code),
        )?;
        let today = self.clock.today();

        let point = PointOfInterest {
            id: Self::next_id(store),
            name: draft.name,
            category: draft.category,
            coordinate: draft.coordinate,
            description: draft.description,
            status: AdminStatus::Active,
            condition: FieldCondition::unknown(),
            qr_code,
            created_at: today,
            updated_at: today,
        };
        store.upsert(point.clone());

        tracing::info!(
            "Created point {} '{}' ({}) with QR code {}",
            point.id,
            point.name,
            point.category,
            point.qr_code
        );
        Ok(point)
    }

    /// Replace the editable fields of `id`. Identity fields, status and field
    /// condition are carried over.
    pub fn update(
        &self,
        store: &mut PointStore,
        id: PointId,
        draft: &PointDraftDto,
    ) -> LifecycleResult<PointOfInterest> {
        let draft = draft.parse()?;
        let existing = store.get(id).ok_or(LifecycleError::NotFound(id))?;

        let point = PointOfInterest {
            name: draft.name,
            category: draft.category,
            coordinate: draft.coordinate,
            description: draft.description,
            updated_at: self.clock.today().max(existing.created_at),
            ..existing.clone()
        };
        store.upsert(point.clone());

        tracing::info!("Updated point {} '{}'", point.id, point.name);
        Ok(point)
    }

    /// Delete `id` and clear the selection if it pointed there.
    ///
    /// Returns the removed record, or `None` when nothing was stored under `id`.
    pub fn delete(
        &self,
        store: &mut PointStore,
        selection: &mut SelectionController,
        id: PointId,
    ) -> Option<PointOfInterest> {
        let removed = store.remove(id);
        if selection.is_viewing(id) {
            selection.clear();
            tracing::debug!("Cleared selection of deleted point {}", id);
        }

        match &removed {
            Some(point) => tracing::info!("Deleted point {} '{}'", point.id, point.name),
            None => tracing::debug!("Delete of absent point {} ignored", id),
        }
        removed
    }

    pub fn toggle_status(
        &self,
        store: &mut PointStore,
        id: PointId,
    ) -> LifecycleResult<PointOfInterest> {
        let existing = store.get(id).ok_or(LifecycleError::NotFound(id))?;

        let point = PointOfInterest {
            status: existing.status.toggled(),
            updated_at: self.clock.today().max(existing.created_at),
            ..existing.clone()
        };
        store.upsert(point.clone());

        tracing::info!("Point {} is now {}", point.id, point.status);
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use fake::faker::address::en::StreetName;
    use fake::Fake;
    use regex::Regex;

    use super::*;
    use crate::features::categories::Category;
    use crate::features::points::services::selection::Selection;
    use crate::features::points::services::CategoryFilterSet;
    use crate::shared::test_helpers::{draft, FixedClock, ScriptedSequence};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller_at(clock: Arc<FixedClock>) -> AdminLifecycleController {
        AdminLifecycleController::new(clock, Box::new(RandomSequence::new()))
    }

    #[test]
    fn test_create_stamps_and_activates() {
        let clock = Arc::new(FixedClock::new(date(2026, 10, 16)));
        let mut admin = controller_at(clock);
        let mut store = PointStore::new();

        let point = admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(point.status, AdminStatus::Active);
        assert_eq!(point.created_at, date(2026, 10, 16));
        assert_eq!(point.updated_at, point.created_at);
        assert_eq!(store.get(point.id), Some(&point));
    }

    #[test]
    fn test_invalid_create_leaves_store_untouched() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();

        let err = admin
            .create(&mut store, &draft("Far Away Bin", "bins", "999", "77.59"))
            .unwrap_err();

        assert!(matches!(err, LifecycleError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_preserves_identity_and_advances_date() {
        let clock = Arc::new(FixedClock::new(date(2026, 1, 15)));
        let mut admin = controller_at(clock.clone());
        let mut store = PointStore::new();
        let created = admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();

        clock.advance_days(5);
        let updated = admin
            .update(
                &mut store,
                created.id,
                &draft("Central Waste Station", "toilets", "12.98", "77.60"),
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.qr_code, created.qr_code);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, date(2026, 1, 20));
        assert_eq!(updated.name, "Central Waste Station");
        assert_eq!(updated.category, Category::Toilets);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_keeps_status() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        let created = admin
            .create(&mut store, &draft("Corner Lamp", "streetlights", "12.9", "77.5"))
            .unwrap();
        admin.toggle_status(&mut store, created.id).unwrap();

        let updated = admin
            .update(&mut store, created.id, &draft("Corner Lamp 2", "streetlights", "12.9", "77.5"))
            .unwrap();
        assert_eq!(updated.status, AdminStatus::Inactive);
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let clock = Arc::new(FixedClock::new(date(2026, 3, 1)));
        let mut admin = controller_at(clock.clone());
        let mut store = PointStore::new();
        let created = admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();

        clock.advance_days(-10);
        let toggled = admin.toggle_status(&mut store, created.id).unwrap();
        assert_eq!(toggled.updated_at, created.created_at);
    }

    #[test]
    fn test_update_and_toggle_unknown_id_not_found() {
        let admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        let missing = Uuid::now_v7();

        let err = admin
            .update(&mut store, missing, &draft("Ghost", "bins", "1", "1"))
            .unwrap_err();
        assert!(matches!(err, LifecycleError::NotFound(id) if id == missing));

        let err = admin.toggle_status(&mut store, missing).unwrap_err();
        assert!(matches!(err, LifecycleError::NotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_update_does_not_mutate() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        let created = admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();

        let err = admin
            .update(&mut store, created.id, &draft("", "bins", "12.97", "77.59"))
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));
        assert_eq!(store.get(created.id), Some(&created));
    }

    #[test]
    fn test_toggle_status_round_trip() {
        let clock = Arc::new(FixedClock::new(date(2026, 5, 1)));
        let mut admin = controller_at(clock.clone());
        let mut store = PointStore::new();
        let created = admin
            .create(&mut store, &draft("Corner Lamp", "streetlights", "12.9", "77.5"))
            .unwrap();

        clock.advance_days(1);
        let off = admin.toggle_status(&mut store, created.id).unwrap();
        assert_eq!(off.status, AdminStatus::Inactive);
        assert_eq!(off.updated_at, date(2026, 5, 2));

        let on = admin.toggle_status(&mut store, created.id).unwrap();
        assert_eq!(on.status, AdminStatus::Active);
    }

    #[test]
    fn test_delete_clears_matching_selection_only() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        let mut selection = SelectionController::default();
        let bin = admin
            .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
            .unwrap();
        let lamp = admin
            .create(&mut store, &draft("Corner Lamp", "streetlights", "12.9", "77.5"))
            .unwrap();

        selection.select(&lamp);
        admin.delete(&mut store, &mut selection, bin.id);
        assert_eq!(selection.state(&store), Selection::Viewing(lamp.id));

        admin.delete(&mut store, &mut selection, lamp.id);
        assert_eq!(selection.state(&store), Selection::Idle);
        assert!(!selection.is_viewing(lamp.id));

        assert!(admin.delete(&mut store, &mut selection, lamp.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_forced_qr_collisions_stay_unique() {
        let sequence = ScriptedSequence::new(vec![123; 5]);
        let mut admin = AdminLifecycleController::new(
            Arc::new(FixedClock::new(date(2026, 10, 16))),
            Box::new(sequence),
        );
        let mut store = PointStore::new();

        let codes: Vec<String> = (0..5)
            .map(|_| {
                admin
                    .create(&mut store, &draft("Central Bin", "bins", "12.97", "77.59"))
                    .unwrap()
                    .qr_code
            })
            .collect();

        assert_eq!(
            codes,
            vec![
                "QR123-BIN-CENTRAL-BI",
                "QR124-BIN-CENTRAL-BI",
                "QR125-BIN-CENTRAL-BI",
                "QR126-BIN-CENTRAL-BI",
                "QR127-BIN-CENTRAL-BI",
            ]
        );
    }

    #[test]
    fn test_many_creates_have_unique_ids_and_codes() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();

        for i in 0..300 {
            let name: String = StreetName().fake();
            let category = Category::ALL[i % Category::ALL.len()];
            admin
                .create(&mut store, &draft(&name, category.slug(), "12.97", "77.59"))
                .unwrap();
        }

        let ids: HashSet<PointId> = store.list().iter().map(|p| p.id).collect();
        let codes: HashSet<&str> = store.list().iter().map(|p| p.qr_code.as_str()).collect();
        assert_eq!(ids.len(), 300);
        assert_eq!(codes.len(), 300);
    }

    #[test]
    fn test_example_walkthrough() {
        let mut admin = AdminLifecycleController::default();
        let mut store = PointStore::new();
        let mut filters = CategoryFilterSet::default();
        let mut selection = SelectionController::default();

        let point = admin
            .create(
                &mut store,
                &PointDraftDto {
                    description: "x".to_string(),
                    ..draft("Central Bin", "bins", "12.97", "77.59")
                },
            )
            .unwrap();
        assert_eq!(store.len(), 1);
        let pattern = Regex::new(r"^QR\d{3}-BIN-CENTRAL-BI$").unwrap();
        assert!(pattern.is_match(&point.qr_code));

        filters.toggle(Category::Bins);
        assert_eq!(store.filtered_by(&filters).count(), 1);

        filters.toggle(Category::Toilets);
        assert_eq!(store.filtered_by(&filters).count(), 1);

        selection.select(&point);
        assert_eq!(selection.state(&store), Selection::Viewing(point.id));

        admin.delete(&mut store, &mut selection, point.id);
        assert!(store.is_empty());
        assert_eq!(selection.state(&store), Selection::Idle);
    }
}
