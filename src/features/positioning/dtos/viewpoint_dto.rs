use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::positioning::models::{PositionSource, ResolvedPosition};
use crate::features::positioning::services::ReportedPosition;

/// Geolocation result relayed by the browser. Omit everything when the
/// browser has no geolocation support.
///
/// Coordinates are taken as text so a garbled value falls back instead of
/// failing extraction.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ViewpointQuery {
    /// Reported latitude
    pub lat: Option<String>,
    /// Reported longitude
    pub lng: Option<String>,
    /// Geolocation error code or message, if the browser request failed
    pub error: Option<String>,
}

impl ViewpointQuery {
    pub fn into_report(self) -> Option<ReportedPosition> {
        ReportedPosition::from_parts(self.lat, self.lng, self.error)
    }
}

/// Initial map viewpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewpointResponseDto {
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
    pub source: PositionSource,
    pub zoom: u8,
}

impl ViewpointResponseDto {
    pub fn new(resolved: ResolvedPosition, zoom: u8) -> Self {
        Self {
            coordinates: [
                resolved.coordinate.latitude(),
                resolved.coordinate.longitude(),
            ],
            source: resolved.source,
            zoom,
        }
    }
}
