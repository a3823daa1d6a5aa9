mod admin_lifecycle;
mod category_filter;
pub mod demo_data;
mod map_service;
mod point_store;
pub mod qr_code;
mod selection;

pub use admin_lifecycle::AdminLifecycleController;
pub use category_filter::CategoryFilterSet;
pub use map_service::{MapService, MapState};
pub use point_store::{PointStore, StoreStats};
pub use selection::SelectionController;
