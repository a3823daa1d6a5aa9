//! Initial map viewpoint resolution with a deterministic fallback.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/map/viewpoint` | Resolve the viewpoint from the browser's geolocation report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PositioningService;
