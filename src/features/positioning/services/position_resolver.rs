use std::sync::Arc;

use crate::features::positioning::models::{PositionSource, ResolvedPosition};
use crate::features::positioning::services::GeolocationProvider;
use crate::shared::geo::Coordinate;

/// Resolves a reference viewpoint, substituting a fixed fallback whenever the
/// geolocation capability is missing or fails. Never retries, never errors.
#[derive(Clone)]
pub struct PositionResolver {
    provider: Option<Arc<dyn GeolocationProvider>>,
    fallback: Coordinate,
}

impl PositionResolver {
    pub fn new(fallback: Coordinate) -> Self {
        Self {
            provider: None,
            fallback,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn GeolocationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub async fn resolve(&self) -> Coordinate {
        self.resolve_with_source().await.coordinate
    }

    pub async fn resolve_with_source(&self) -> ResolvedPosition {
        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!("No geolocation capability, using fallback viewpoint");
            return self.fallback_position();
        };

        match provider.request().await {
            Ok(coordinate) => ResolvedPosition {
                coordinate,
                source: PositionSource::Device,
            },
            Err(e) => {
                tracing::warn!("Geolocation failed ({}), using fallback viewpoint", e);
                self.fallback_position()
            }
        }
    }

    fn fallback_position(&self) -> ResolvedPosition {
        ResolvedPosition {
            coordinate: self.fallback,
            source: PositionSource::Fallback,
        }
    }
}
