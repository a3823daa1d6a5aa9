use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::geo::Coordinate;

/// Where a resolved viewpoint came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    Device,
    Fallback,
}

impl std::fmt::Display for PositionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionSource::Device => write!(f, "device"),
            PositionSource::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    pub coordinate: Coordinate,
    pub source: PositionSource,
}
