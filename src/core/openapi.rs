use utoipa::{Modify, OpenApi};

use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::points::{
    dtos as points_dtos, handlers as points_handlers, models as points_models,
};
use crate::features::positioning::{
    dtos as positioning_dtos, handlers as positioning_handlers, models as positioning_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Map viewpoint
        positioning_handlers::get_viewpoint,
        // Map surface
        points_handlers::list_visible_points,
        points_handlers::select_point,
        points_handlers::get_selection,
        points_handlers::clear_selection,
        points_handlers::get_filters,
        points_handlers::toggle_filter,
        points_handlers::clear_filters,
        points_handlers::open_qr_code,
        // Admin
        points_handlers::list_points,
        points_handlers::get_point,
        points_handlers::create_point,
        points_handlers::update_point,
        points_handlers::delete_point,
        points_handlers::toggle_point_status,
        points_handlers::get_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_models::Category,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Positioning
            positioning_models::PositionSource,
            positioning_dtos::ViewpointResponseDto,
            ApiResponse<positioning_dtos::ViewpointResponseDto>,
            // Points
            points_models::AdminStatus,
            points_models::OperationalStatus,
            points_models::FieldCondition,
            points_dtos::PointDraftDto,
            points_dtos::PointResponseDto,
            points_dtos::DeletePointResponseDto,
            points_dtos::PointStatsDto,
            points_dtos::MapPointDto,
            points_dtos::FilterStateDto,
            points_dtos::SelectionState,
            points_dtos::SelectionResponseDto,
            ApiResponse<Vec<points_dtos::PointResponseDto>>,
            ApiResponse<points_dtos::PointResponseDto>,
            ApiResponse<points_dtos::DeletePointResponseDto>,
            ApiResponse<points_dtos::PointStatsDto>,
            ApiResponse<Vec<points_dtos::MapPointDto>>,
            ApiResponse<points_dtos::FilterStateDto>,
            ApiResponse<points_dtos::SelectionResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Point-of-interest categories (public)"),
        (name = "map", description = "Public map: viewpoint, filters, detail view and QR lookup"),
        (name = "admin", description = "Point management for the admin panel"),
    ),
    info(
        title = "Urban Maps API",
        version = "0.1.0",
        description = "API documentation for Urban Maps",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
