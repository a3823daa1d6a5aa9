use std::sync::Arc;

use crate::core::config::MapConfig;
use crate::features::positioning::dtos::ViewpointResponseDto;
use crate::features::positioning::services::{PositionResolver, ReportedPosition};

/// Builds the initial map viewpoint for a client
pub struct PositioningService {
    resolver: PositionResolver,
    default_zoom: u8,
}

impl PositioningService {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            resolver: PositionResolver::new(config.fallback),
            default_zoom: config.default_zoom,
        }
    }

    /// Resolve the viewpoint from whatever the client reported
    pub async fn viewpoint(&self, report: Option<ReportedPosition>) -> ViewpointResponseDto {
        let resolver = match report {
            Some(reported) => self.resolver.clone().with_provider(Arc::new(reported)),
            None => self.resolver.clone(),
        };

        let resolved = resolver.resolve_with_source().await;
        tracing::debug!(
            "Resolved viewpoint {:?} from {}",
            resolved.coordinate,
            resolved.source
        );

        ViewpointResponseDto::new(resolved, self.default_zoom)
    }
}
