//! Point-of-interest categories and their display metadata.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List the category catalogue |
//! | GET | `/api/categories/{slug}` | Get one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

pub use models::Category;
