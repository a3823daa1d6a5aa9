//! Points of interest: the public map surface and the admin panel.
//!
//! Both share one [`services::MapState`] (store, category filter, detail-view
//! selection and lifecycle controller) behind a single lock.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/map/points` | Visible points (active, filtered, searched) |
//! | POST | `/api/map/points/{id}/select` | Open a point's detail view |
//! | GET | `/api/map/selection` | Current detail view |
//! | DELETE | `/api/map/selection` | Close the detail view |
//! | GET | `/api/map/filters` | Active category filter |
//! | POST | `/api/map/filters/{category}/toggle` | Toggle a category |
//! | DELETE | `/api/map/filters` | Show every category |
//! | GET | `/api/map/qr/{code}` | Open the point carrying a QR code |
//! | GET | `/api/admin/points` | List all points |
//! | POST | `/api/admin/points` | Create a point |
//! | GET | `/api/admin/points/{id}` | Get a point |
//! | PUT | `/api/admin/points/{id}` | Update a point |
//! | DELETE | `/api/admin/points/{id}` | Delete a point |
//! | POST | `/api/admin/points/{id}/toggle-status` | Flip active/inactive |
//! | GET | `/api/admin/stats` | Dashboard counters |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
