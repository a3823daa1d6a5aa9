use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::features::categories::Category;
use crate::features::points::models::{
    AdminStatus, FieldCondition, PointOfInterest, ValidPointDraft,
};
use crate::features::points::services::StoreStats;
use crate::shared::geo::Coordinate;

/// Admin form payload for creating or editing a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointDraftDto {
    #[validate(length(max = 200, message = "Name must not exceed 200 characters"))]
    pub name: String,

    /// Category slug or label, e.g. "bins" or "Feeding Spots"
    pub category: String,

    /// `[latitude, longitude]` as decimal strings
    #[schema(value_type = Vec<String>, example = json!(["12.9716", "77.5946"]))]
    pub coordinates: [String; 2],

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: String,
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn parse_component(raw: &str, axis: &str) -> Result<f64, ValidationError> {
    raw.trim().parse::<f64>().map_err(|_| {
        field_error(
            "not_a_number",
            format!("{} '{}' is not a decimal number", axis, raw),
        )
    })
}

impl PointDraftDto {
    /// Validate every field and produce a typed draft.
    ///
    /// All failing fields are reported together under `name`, `category`,
    /// `coordinates` and `description`.
    pub fn parse(&self) -> Result<ValidPointDraft, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        let name = self.name.trim();
        if name.is_empty() {
            errors.add(
                "name",
                field_error("required", "Name is required".to_string()),
            );
        }

        let category = match self.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(e) => {
                let message = if self.category.trim().is_empty() {
                    "Category is required".to_string()
                } else {
                    e.to_string()
                };
                errors.add("category", field_error("category", message));
                None
            }
        };

        let coordinate = match (
            parse_component(&self.coordinates[0], "Latitude"),
            parse_component(&self.coordinates[1], "Longitude"),
        ) {
            (Ok(lat), Ok(lng)) => match Coordinate::new(lat, lng) {
                Ok(coordinate) => Some(coordinate),
                Err(e) => {
                    errors.add("coordinates", field_error("out_of_range", e.to_string()));
                    None
                }
            },
            (lat, lng) => {
                for err in [lat.err(), lng.err()].into_iter().flatten() {
                    errors.add("coordinates", err);
                }
                None
            }
        };

        match (category, coordinate) {
            (Some(category), Some(coordinate)) if errors.is_empty() => Ok(ValidPointDraft {
                name: name.to_string(),
                category,
                coordinate,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Full point record as shown in the admin panel and detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointResponseDto {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub category_label: String,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
    pub description: String,
    pub status: AdminStatus,
    pub condition: FieldCondition,
    pub qr_code: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl From<&PointOfInterest> for PointResponseDto {
    fn from(p: &PointOfInterest) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            category: p.category,
            category_label: p.category.label().to_string(),
            coordinates: [p.coordinate.latitude(), p.coordinate.longitude()],
            description: p.description.clone(),
            status: p.status,
            condition: p.condition.clone(),
            qr_code: p.qr_code.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PointOfInterest> for PointResponseDto {
    fn from(p: PointOfInterest) -> Self {
        Self::from(&p)
    }
}

/// Result of an admin delete; deleting an absent id is not an error
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePointResponseDto {
    pub id: Uuid,
    pub deleted: bool,
}

/// Dashboard counters for the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointStatsDto {
    pub total_locations: usize,
    pub active_qr_codes: usize,
    pub categories: usize,
}

impl From<StoreStats> for PointStatsDto {
    fn from(s: StoreStats) -> Self {
        Self {
            total_locations: s.total,
            active_qr_codes: s.active,
            categories: s.categories,
        }
    }
}
