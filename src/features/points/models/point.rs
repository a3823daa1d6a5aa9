use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::Category;
use crate::shared::geo::Coordinate;

pub type PointId = Uuid;

/// Administrative visibility of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Active,
    Inactive,
}

impl AdminStatus {
    pub fn toggled(self) -> Self {
        match self {
            AdminStatus::Active => AdminStatus::Inactive,
            AdminStatus::Inactive => AdminStatus::Active,
        }
    }
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminStatus::Active => write!(f, "active"),
            AdminStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Field-reported condition of the facility, independent of [`AdminStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OperationalStatus {
    Working,
    NotWorking,
    Unknown,
}

/// Read-only condition shown in the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldCondition {
    pub status: OperationalStatus,
    /// Average visitor rating, 0 to 5
    pub rating: Option<f32>,
    pub operating_hours: Option<String>,
}

impl FieldCondition {
    pub fn unknown() -> Self {
        Self {
            status: OperationalStatus::Unknown,
            rating: None,
            operating_hours: None,
        }
    }
}

/// In-memory point-of-interest record
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: PointId,
    pub name: String,
    pub category: Category,
    pub coordinate: Coordinate,
    pub description: String,
    pub status: AdminStatus,
    pub condition: FieldCondition,
    pub qr_code: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl PointOfInterest {
    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }

    /// Case-insensitive match of `query` against name and description
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// A validated draft ready to be applied to the store
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPointDraft {
    pub name: String,
    pub category: Category,
    pub coordinate: Coordinate,
    pub description: String,
}
