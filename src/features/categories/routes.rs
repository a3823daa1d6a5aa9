use axum::{routing::get, Router};

use crate::features::categories::handlers;

/// Create routes for the categories feature
///
/// Note: This feature is public and stateless; the catalogue is fixed at compile time.
pub fn routes() -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{slug}", get(handlers::get_category))
}
