use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::points::dtos::{
    DeletePointResponseDto, PointDraftDto, PointResponseDto, PointStatsDto,
};
use crate::features::points::services::MapService;
use crate::shared::types::{ApiResponse, Meta};

/// List every point, active or not
#[utoipa::path(
    get,
    path = "/api/admin/points",
    responses(
        (status = 200, description = "All points", body = ApiResponse<Vec<PointResponseDto>>),
    ),
    tag = "admin"
)]
pub async fn list_points(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<Vec<PointResponseDto>>> {
    let points = service.list_all().await;
    let total = points.len();
    Json(ApiResponse::success(
        Some(points),
        None,
        Some(Meta::total(total)),
    ))
}

/// Get point by ID
#[utoipa::path(
    get,
    path = "/api/admin/points/{id}",
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Point found", body = ApiResponse<PointResponseDto>),
        (status = 404, description = "Point not found")
    ),
    tag = "admin"
)]
pub async fn get_point(
    State(service): State<Arc<MapService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PointResponseDto>>> {
    let point = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(point), None, None)))
}

/// Create a point
///
/// Assigns the id, QR code and date stamps. The point starts active with an
/// unknown field condition.
#[utoipa::path(
    post,
    path = "/api/admin/points",
    request_body = PointDraftDto,
    responses(
        (status = 200, description = "Point created", body = ApiResponse<PointResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "No free QR code for this category and name")
    ),
    tag = "admin"
)]
pub async fn create_point(
    State(service): State<Arc<MapService>>,
    AppJson(dto): AppJson<PointDraftDto>,
) -> Result<Json<ApiResponse<PointResponseDto>>> {
    let point = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(
        Some(point),
        Some("Location created".to_string()),
        None,
    )))
}

/// Update a point
///
/// Replaces name, category, coordinates and description. The id, QR code,
/// creation date and status are kept.
#[utoipa::path(
    put,
    path = "/api/admin/points/{id}",
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    request_body = PointDraftDto,
    responses(
        (status = 200, description = "Point updated", body = ApiResponse<PointResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Point not found")
    ),
    tag = "admin"
)]
pub async fn update_point(
    State(service): State<Arc<MapService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<PointDraftDto>,
) -> Result<Json<ApiResponse<PointResponseDto>>> {
    let point = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(point),
        Some("Location updated".to_string()),
        None,
    )))
}

/// Delete a point
///
/// Deleting an unknown id is a no-op reported with `deleted: false`.
#[utoipa::path(
    delete,
    path = "/api/admin/points/{id}",
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = ApiResponse<DeletePointResponseDto>),
    ),
    tag = "admin"
)]
pub async fn delete_point(
    State(service): State<Arc<MapService>>,
    Path(id): Path<Uuid>,
) -> Json<ApiResponse<DeletePointResponseDto>> {
    Json(ApiResponse::success(Some(service.delete(id).await), None, None))
}

/// Flip a point between active and inactive
#[utoipa::path(
    post,
    path = "/api/admin/points/{id}/toggle-status",
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Status toggled", body = ApiResponse<PointResponseDto>),
        (status = 404, description = "Point not found")
    ),
    tag = "admin"
)]
pub async fn toggle_point_status(
    State(service): State<Arc<MapService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PointResponseDto>>> {
    let point = service.toggle_status(id).await?;
    Ok(Json(ApiResponse::success(Some(point), None, None)))
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Point statistics", body = ApiResponse<PointStatsDto>),
    ),
    tag = "admin"
)]
pub async fn get_stats(State(service): State<Arc<MapService>>) -> Json<ApiResponse<PointStatsDto>> {
    Json(ApiResponse::success(Some(service.stats().await), None, None))
}
