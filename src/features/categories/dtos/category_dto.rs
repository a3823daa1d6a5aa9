use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for a category filter pill
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Category,
    pub label: String,
    pub color: String,
    pub icon: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c,
            label: c.label().to_string(),
            color: c.color().to_string(),
            icon: c.icon().to_string(),
        }
    }
}
