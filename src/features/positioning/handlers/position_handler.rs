use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::features::positioning::dtos::{ViewpointQuery, ViewpointResponseDto};
use crate::features::positioning::services::PositioningService;
use crate::shared::types::ApiResponse;

/// Resolve the initial map viewpoint
///
/// Pass the browser's geolocation result as `lat`/`lng`, or its failure as
/// `error`. Any failure, or no report at all, yields the fallback viewpoint;
/// this endpoint never fails.
#[utoipa::path(
    get,
    path = "/api/map/viewpoint",
    params(ViewpointQuery),
    responses(
        (status = 200, description = "Resolved viewpoint", body = ApiResponse<ViewpointResponseDto>),
    ),
    tag = "map"
)]
pub async fn get_viewpoint(
    State(service): State<Arc<PositioningService>>,
    Query(query): Query<ViewpointQuery>,
) -> Json<ApiResponse<ViewpointResponseDto>> {
    let viewpoint = service.viewpoint(query.into_report()).await;
    Json(ApiResponse::success(Some(viewpoint), None, None))
}
