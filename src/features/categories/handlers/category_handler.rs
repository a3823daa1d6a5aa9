use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::shared::types::{ApiResponse, Meta};

/// List all categories
///
/// Returns the fixed category catalogue in filter-pill order.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryResponseDto>>> {
    let categories: Vec<CategoryResponseDto> = Category::ALL.into_iter().map(Into::into).collect();
    let total = categories.len();
    Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta::total(total)),
    ))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = slug
        .parse::<Category>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}
