pub mod geolocation;
mod position_resolver;
mod positioning_service;

pub use geolocation::{GeolocationProvider, ReportedPosition};
pub use position_resolver::PositionResolver;
pub use positioning_service::PositioningService;
