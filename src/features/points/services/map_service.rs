use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::categories::Category;
use crate::features::points::dtos::{
    DeletePointResponseDto, FilterStateDto, MapPointDto, PointDraftDto, PointResponseDto,
    PointStatsDto, SelectionResponseDto, VisiblePointsQuery,
};
use crate::features::points::models::PointId;
use crate::features::points::services::{
    AdminLifecycleController, CategoryFilterSet, PointStore, SelectionController,
};
use crate::shared::geo::Coordinate;

/// Everything the map and admin panel share. Guarded by a single lock so an
/// admin edit and a filtered read never interleave.
#[derive(Default)]
pub struct MapState {
    pub store: PointStore,
    pub filters: CategoryFilterSet,
    pub selection: SelectionController,
    pub admin: AdminLifecycleController,
}

/// Service for the public map and the admin panel
pub struct MapService {
    state: RwLock<MapState>,
}

impl MapService {
    pub fn new(state: MapState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    // =========================================================================
    // MAP
    // =========================================================================

    /// Active points accepted by the category filter and the search text,
    /// in insertion order
    pub async fn visible_points(&self, query: &VisiblePointsQuery) -> Result<Vec<MapPointDto>> {
        let origin = match (query.lat, query.lng) {
            (Some(lat), Some(lng)) => Some(
                Coordinate::new(lat, lng)
                    .map_err(|e| AppError::Validation(format!("Invalid viewer position: {}", e)))?,
            ),
            (None, None) => None,
            _ => {
                return Err(AppError::Validation(
                    "lat and lng must be given together".to_string(),
                ))
            }
        };
        let search = query.search.as_deref().unwrap_or("");

        let state = self.state.read().await;
        Ok(state
            .store
            .filtered_by(&state.filters)
            .filter(|p| p.is_active() && p.matches_search(search))
            .map(|p| MapPointDto::new(p, origin.as_ref()))
            .collect())
    }

    pub async fn filter_state(&self) -> FilterStateDto {
        let state = self.state.read().await;
        FilterStateDto::from(&state.filters)
    }

    pub async fn toggle_filter(&self, category: Category) -> FilterStateDto {
        let mut state = self.state.write().await;
        let now_active = state.filters.toggle(category);
        tracing::debug!(
            "Filter {} {}",
            category,
            if now_active { "enabled" } else { "disabled" }
        );
        FilterStateDto::from(&state.filters)
    }

    pub async fn clear_filters(&self) -> FilterStateDto {
        let mut state = self.state.write().await;
        state.filters.clear();
        tracing::debug!("Filters cleared");
        FilterStateDto::from(&state.filters)
    }

    /// Open the detail view of `id`. Inactive points are hidden from the map
    /// and read as not found.
    pub async fn select(&self, id: PointId) -> Result<SelectionResponseDto> {
        let mut state = self.state.write().await;
        let MapState {
            store, selection, ..
        } = &mut *state;

        let point = store
            .get(id)
            .filter(|p| p.is_active())
            .ok_or_else(|| AppError::NotFound(format!("Point '{}' not found", id)))?;
        selection.select(point);
        tracing::debug!("Viewing point {}", id);

        Ok(SelectionResponseDto::viewing(point))
    }

    /// Open the detail view of the point carrying `qr_code`
    pub async fn open_qr_code(&self, qr_code: &str) -> Result<SelectionResponseDto> {
        let mut state = self.state.write().await;
        let MapState {
            store, selection, ..
        } = &mut *state;

        let code = qr_code.trim().to_uppercase();
        let point = store
            .find_by_qr_code(&code)
            .filter(|p| p.is_active())
            .ok_or_else(|| AppError::NotFound(format!("QR code '{}' is not assigned", code)))?;
        selection.select(point);
        tracing::debug!("QR code {} opened point {}", code, point.id);

        Ok(SelectionResponseDto::viewing(point))
    }

    /// Current detail view. A point deactivated while open reads as idle.
    pub async fn selection(&self) -> SelectionResponseDto {
        let state = self.state.read().await;
        match state
            .selection
            .current(&state.store)
            .filter(|p| p.is_active())
        {
            Some(point) => SelectionResponseDto::viewing(point),
            None => SelectionResponseDto::idle(),
        }
    }

    pub async fn clear_selection(&self) -> SelectionResponseDto {
        let mut state = self.state.write().await;
        state.selection.clear();
        SelectionResponseDto::idle()
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    pub async fn list_all(&self) -> Vec<PointResponseDto> {
        let state = self.state.read().await;
        state.store.list().iter().map(Into::into).collect()
    }

    pub async fn get(&self, id: PointId) -> Result<PointResponseDto> {
        let state = self.state.read().await;
        state
            .store
            .get(id)
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Point '{}' not found", id)))
    }

    pub async fn create(&self, draft: &PointDraftDto) -> Result<PointResponseDto> {
        let mut state = self.state.write().await;
        let MapState { store, admin, .. } = &mut *state;
        Ok(admin.create(store, draft)?.into())
    }

    pub async fn update(&self, id: PointId, draft: &PointDraftDto) -> Result<PointResponseDto> {
        let mut state = self.state.write().await;
        let MapState { store, admin, .. } = &mut *state;
        Ok(admin.update(store, id, draft)?.into())
    }

    pub async fn delete(&self, id: PointId) -> DeletePointResponseDto {
        let mut state = self.state.write().await;
        let MapState {
            store,
            selection,
            admin,
            ..
        } = &mut *state;

        let removed = admin.delete(store, selection, id);
        DeletePointResponseDto {
            id,
            deleted: removed.is_some(),
        }
    }

    pub async fn toggle_status(&self, id: PointId) -> Result<PointResponseDto> {
        let mut state = self.state.write().await;
        let MapState { store, admin, .. } = &mut *state;
        Ok(admin.toggle_status(store, id)?.into())
    }

    pub async fn stats(&self) -> PointStatsDto {
        let state = self.state.read().await;
        state.store.stats().into()
    }
}
