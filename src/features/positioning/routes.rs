use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::positioning::handlers;
use crate::features::positioning::services::PositioningService;

/// Create routes for the positioning feature
pub fn routes(service: Arc<PositioningService>) -> Router {
    Router::new()
        .route("/api/map/viewpoint", get(handlers::get_viewpoint))
        .with_state(service)
}
