use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::points::handlers;
use crate::features::points::services::MapService;

/// Create public map routes
pub fn routes(service: Arc<MapService>) -> Router {
    Router::new()
        // Markers
        .route("/api/map/points", get(handlers::list_visible_points))
        .route("/api/map/points/{id}/select", post(handlers::select_point))
        // Detail view
        .route(
            "/api/map/selection",
            get(handlers::get_selection).delete(handlers::clear_selection),
        )
        // Category filter
        .route(
            "/api/map/filters",
            get(handlers::get_filters).delete(handlers::clear_filters),
        )
        .route(
            "/api/map/filters/{category}/toggle",
            post(handlers::toggle_filter),
        )
        // QR scan
        .route("/api/map/qr/{code}", get(handlers::open_qr_code))
        .with_state(service)
}

/// Create admin routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<MapService>) -> Router {
    Router::new()
        .route(
            "/points",
            get(handlers::list_points).post(handlers::create_point),
        )
        .route(
            "/points/{id}",
            get(handlers::get_point)
                .put(handlers::update_point)
                .delete(handlers::delete_point),
        )
        .route(
            "/points/{id}/toggle-status",
            post(handlers::toggle_point_status),
        )
        .route("/stats", get(handlers::get_stats))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::points::services::MapState;

    fn server() -> TestServer {
        let service = Arc::new(MapService::new(MapState::default()));
        let app = Router::new()
            .merge(routes(Arc::clone(&service)))
            .nest("/api/admin", admin_routes(service));
        TestServer::new(app).unwrap()
    }

    fn central_bin() -> Value {
        json!({
            "name": "Central Bin",
            "category": "bins",
            "coordinates": ["12.97", "77.59"],
            "description": "Near the fountain"
        })
    }

    #[tokio::test]
    async fn test_example_walkthrough_over_http() {
        let server = server();

        let created: Value = server
            .post("/api/admin/points")
            .json(&central_bin())
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let qr_code = created["data"]["qrCode"].as_str().unwrap();
        assert!(qr_code.starts_with("QR"));
        assert!(qr_code.ends_with("-BIN-CENTRAL-BI"));
        assert_eq!(created["data"]["status"], "active");

        let filters: Value = server.post("/api/map/filters/bins/toggle").await.json();
        assert_eq!(filters["data"]["active"], json!(["bins"]));
        let visible: Value = server.get("/api/map/points").await.json();
        assert_eq!(visible["data"].as_array().unwrap().len(), 1);

        server.post("/api/map/filters/toilets/toggle").await;
        let visible: Value = server.get("/api/map/points").await.json();
        assert_eq!(visible["data"][0]["id"], id.as_str());

        server
            .post(&format!("/api/map/points/{}/select", id))
            .await
            .assert_status_ok();
        server
            .delete(&format!("/api/admin/points/{}", id))
            .await
            .assert_status_ok();

        let selection: Value = server.get("/api/map/selection").await.json();
        assert_eq!(selection["data"]["state"], "idle");
        assert!(selection["data"]["point"].is_null());
    }

    #[tokio::test]
    async fn test_invalid_draft_reports_fields_and_keeps_count() {
        let server = server();

        let response = server
            .post("/api/admin/points")
            .json(&json!({
                "name": "  ",
                "category": "volcanoes",
                "coordinates": ["999", "77.59"]
            }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("name:")));
        assert!(errors
            .iter()
            .any(|e| e.as_str().unwrap().starts_with("category:")));
        assert!(errors
            .iter()
            .any(|e| e.as_str().unwrap().starts_with("coordinates:")));

        let stats: Value = server.get("/api/admin/stats").await.json();
        assert_eq!(stats["data"]["totalLocations"], 0);
    }

    #[tokio::test]
    async fn test_unknown_ids_and_categories() {
        let server = server();
        let missing = uuid::Uuid::now_v7();

        server
            .get(&format!("/api/admin/points/{}", missing))
            .await
            .assert_status_not_found();
        server
            .post(&format!("/api/admin/points/{}/toggle-status", missing))
            .await
            .assert_status_not_found();
        server
            .post(&format!("/api/map/points/{}/select", missing))
            .await
            .assert_status_not_found();
        server
            .post("/api/map/filters/volcanoes/toggle")
            .await
            .assert_status_bad_request();

        let deleted: Value = server
            .delete(&format!("/api/admin/points/{}", missing))
            .await
            .json();
        assert_eq!(deleted["data"]["deleted"], false);
    }

    #[tokio::test]
    async fn test_inactive_points_leave_the_map_but_stay_in_admin() {
        let server = server();
        let created: Value = server
            .post("/api/admin/points")
            .json(&central_bin())
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let qr_code = created["data"]["qrCode"].as_str().unwrap().to_string();

        let toggled: Value = server
            .post(&format!("/api/admin/points/{}/toggle-status", id))
            .await
            .json();
        assert_eq!(toggled["data"]["status"], "inactive");

        let visible: Value = server.get("/api/map/points").await.json();
        assert!(visible["data"].as_array().unwrap().is_empty());
        let all: Value = server.get("/api/admin/points").await.json();
        assert_eq!(all["meta"]["total"], 1);

        server
            .post(&format!("/api/map/points/{}/select", id))
            .await
            .assert_status_not_found();
        server
            .get(&format!("/api/map/qr/{}", qr_code))
            .await
            .assert_status_not_found();
        let selection: Value = server.get("/api/map/selection").await.json();
        assert_eq!(selection["data"]["state"], "idle");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let server = server();
        server
            .post("/api/admin/points")
            .text("{not json")
            .content_type("application/json")
            .await
            .assert_status_bad_request();
    }
}
