use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::Category;
use crate::features::points::dtos::{
    FilterStateDto, MapPointDto, SelectionResponseDto, VisiblePointsQuery,
};
use crate::features::points::services::MapService;
use crate::shared::types::{ApiResponse, Meta};

/// List the points currently shown on the map
///
/// Only active points are listed. The category filter applies first, then the
/// optional `search` text. Passing `lat` and `lng` adds `distanceMeters`.
#[utoipa::path(
    get,
    path = "/api/map/points",
    params(VisiblePointsQuery),
    responses(
        (status = 200, description = "Visible points", body = ApiResponse<Vec<MapPointDto>>),
        (status = 400, description = "Invalid viewer position")
    ),
    tag = "map"
)]
pub async fn list_visible_points(
    State(service): State<Arc<MapService>>,
    Query(query): Query<VisiblePointsQuery>,
) -> Result<Json<ApiResponse<Vec<MapPointDto>>>> {
    let points = service.visible_points(&query).await?;
    let total = points.len();
    Ok(Json(ApiResponse::success(
        Some(points),
        None,
        Some(Meta::total(total)),
    )))
}

/// Open the detail view of a point
#[utoipa::path(
    post,
    path = "/api/map/points/{id}/select",
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Point selected", body = ApiResponse<SelectionResponseDto>),
        (status = 404, description = "Point not found")
    ),
    tag = "map"
)]
pub async fn select_point(
    State(service): State<Arc<MapService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SelectionResponseDto>>> {
    let selection = service.select(id).await?;
    Ok(Json(ApiResponse::success(Some(selection), None, None)))
}

/// Get the current detail view
#[utoipa::path(
    get,
    path = "/api/map/selection",
    responses(
        (status = 200, description = "Current selection", body = ApiResponse<SelectionResponseDto>),
    ),
    tag = "map"
)]
pub async fn get_selection(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<SelectionResponseDto>> {
    Json(ApiResponse::success(Some(service.selection().await), None, None))
}

/// Close the detail view
#[utoipa::path(
    delete,
    path = "/api/map/selection",
    responses(
        (status = 200, description = "Selection cleared", body = ApiResponse<SelectionResponseDto>),
    ),
    tag = "map"
)]
pub async fn clear_selection(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<SelectionResponseDto>> {
    Json(ApiResponse::success(
        Some(service.clear_selection().await),
        None,
        None,
    ))
}

/// Get the active category filter
#[utoipa::path(
    get,
    path = "/api/map/filters",
    responses(
        (status = 200, description = "Active filter", body = ApiResponse<FilterStateDto>),
    ),
    tag = "map"
)]
pub async fn get_filters(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<FilterStateDto>> {
    Json(ApiResponse::success(Some(service.filter_state().await), None, None))
}

/// Toggle one category in the filter
#[utoipa::path(
    post,
    path = "/api/map/filters/{category}/toggle",
    params(
        ("category" = String, Path, description = "Category slug or label")
    ),
    responses(
        (status = 200, description = "Filter after the toggle", body = ApiResponse<FilterStateDto>),
        (status = 400, description = "Unknown category")
    ),
    tag = "map"
)]
pub async fn toggle_filter(
    State(service): State<Arc<MapService>>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<FilterStateDto>>> {
    let category = category
        .parse::<Category>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let filters = service.toggle_filter(category).await;
    Ok(Json(ApiResponse::success(Some(filters), None, None)))
}

/// Clear the filter so every category is shown
#[utoipa::path(
    delete,
    path = "/api/map/filters",
    responses(
        (status = 200, description = "Filter cleared", body = ApiResponse<FilterStateDto>),
    ),
    tag = "map"
)]
pub async fn clear_filters(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<FilterStateDto>> {
    Json(ApiResponse::success(Some(service.clear_filters().await), None, None))
}

/// Resolve a scanned QR code and open its point
#[utoipa::path(
    get,
    path = "/api/map/qr/{code}",
    params(
        ("code" = String, Path, description = "QR code text, case-insensitive")
    ),
    responses(
        (status = 200, description = "Point opened", body = ApiResponse<SelectionResponseDto>),
        (status = 404, description = "Code not assigned")
    ),
    tag = "map"
)]
pub async fn open_qr_code(
    State(service): State<Arc<MapService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<SelectionResponseDto>>> {
    let selection = service.open_qr_code(&code).await?;
    Ok(Json(ApiResponse::success(Some(selection), None, None)))
}
