use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::categories::Category;
use crate::features::points::dtos::PointResponseDto;
use crate::features::points::models::PointOfInterest;
use crate::features::points::services::CategoryFilterSet;
use crate::shared::geo::Coordinate;

/// Query params for the visible point listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct VisiblePointsQuery {
    /// Free-text match against name and description
    pub search: Option<String>,
    /// Viewer latitude, enables `distanceMeters` together with `lng`
    pub lat: Option<f64>,
    /// Viewer longitude
    pub lng: Option<f64>,
}

/// Marker data handed to the map surface
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPointDto {
    pub id: Uuid,
    pub label: String,
    pub category: Category,
    pub color: String,
    pub icon: String,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

impl MapPointDto {
    pub fn new(point: &PointOfInterest, origin: Option<&Coordinate>) -> Self {
        Self {
            id: point.id,
            label: point.name.clone(),
            category: point.category,
            color: point.category.color().to_string(),
            icon: point.category.icon().to_string(),
            coordinates: [point.coordinate.latitude(), point.coordinate.longitude()],
            distance_meters: origin.map(|o| o.distance_to(&point.coordinate).round()),
        }
    }
}

/// Current category filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterStateDto {
    pub active: Vec<Category>,
    /// True when no category is active and every point is shown
    pub unrestricted: bool,
}

impl From<&CategoryFilterSet> for FilterStateDto {
    fn from(filters: &CategoryFilterSet) -> Self {
        Self {
            active: filters.active().collect(),
            unrestricted: filters.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Idle,
    Viewing,
}

/// Detail-view state with the open point, if any
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponseDto {
    pub state: SelectionState,
    pub point: Option<PointResponseDto>,
}

impl SelectionResponseDto {
    pub fn idle() -> Self {
        Self {
            state: SelectionState::Idle,
            point: None,
        }
    }

    pub fn viewing(point: &PointOfInterest) -> Self {
        Self {
            state: SelectionState::Viewing,
            point: Some(point.into()),
        }
    }
}
