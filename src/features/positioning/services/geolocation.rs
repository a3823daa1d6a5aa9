use async_trait::async_trait;
use thiserror::Error;

use crate::shared::geo::{Coordinate, CoordinateError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("Geolocation request timed out")]
    Timeout,

    #[error("Reported position is invalid: {0}")]
    InvalidPosition(#[from] CoordinateError),
}

/// Device geolocation capability: one request, one answer
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn request(&self) -> Result<Coordinate, GeolocationError>;
}

/// Position relayed by the browser after it ran its own geolocation request.
///
/// Browsers report failures with the W3C error codes `1` (permission denied),
/// `2` (position unavailable) and `3` (timeout). Clients without the API send
/// `unsupported`. Any other text is kept as the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedPosition {
    latitude: Option<String>,
    longitude: Option<String>,
    error: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ReportedPosition {
    /// Returns `None` when the client reported nothing at all, i.e. the
    /// capability is absent. Blank parts count as missing.
    pub fn from_parts(
        latitude: Option<String>,
        longitude: Option<String>,
        error: Option<String>,
    ) -> Option<Self> {
        let (latitude, longitude, error) =
            (non_blank(latitude), non_blank(longitude), non_blank(error));
        if latitude.is_none() && longitude.is_none() && error.is_none() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            error,
        })
    }
}

fn parse_axis(raw: &str, axis: &str) -> Result<f64, GeolocationError> {
    raw.trim().parse::<f64>().map_err(|_| {
        GeolocationError::PositionUnavailable(format!("{} '{}' is not a number", axis, raw))
    })
}

fn classify_error(raw: &str) -> GeolocationError {
    match raw.trim() {
        "unsupported" | "UNSUPPORTED" => GeolocationError::Unsupported,
        "1" | "PERMISSION_DENIED" => GeolocationError::PermissionDenied,
        "3" | "TIMEOUT" => GeolocationError::Timeout,
        "2" | "POSITION_UNAVAILABLE" => {
            GeolocationError::PositionUnavailable("position unavailable".to_string())
        }
        other => GeolocationError::PositionUnavailable(other.to_string()),
    }
}

#[async_trait]
impl GeolocationProvider for ReportedPosition {
    async fn request(&self) -> Result<Coordinate, GeolocationError> {
        if let Some(ref raw) = self.error {
            return Err(classify_error(raw));
        }
        match (&self.latitude, &self.longitude) {
            (Some(lat), Some(lng)) => Ok(Coordinate::new(
                parse_axis(lat, "latitude")?,
                parse_axis(lng, "longitude")?,
            )?),
            _ => Err(GeolocationError::PositionUnavailable(
                "latitude and longitude must be reported together".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[tokio::test]
    async fn test_reported_coordinate_is_returned_exactly() {
        let reported = ReportedPosition::from_parts(some("28.6139"), some("77.2090"), None).unwrap();
        let coordinate = reported.request().await.unwrap();
        assert_eq!(coordinate.latitude(), 28.6139);
        assert_eq!(coordinate.longitude(), 77.2090);
    }

    #[tokio::test]
    async fn test_reported_error_codes() {
        let denied = ReportedPosition::from_parts(None, None, Some("1".to_string())).unwrap();
        assert_eq!(denied.request().await, Err(GeolocationError::PermissionDenied));

        let timeout = ReportedPosition::from_parts(None, None, Some("TIMEOUT".to_string())).unwrap();
        assert_eq!(timeout.request().await, Err(GeolocationError::Timeout));

        let unsupported =
            ReportedPosition::from_parts(None, None, Some("unsupported".to_string())).unwrap();
        assert_eq!(unsupported.request().await, Err(GeolocationError::Unsupported));

        let other =
            ReportedPosition::from_parts(None, None, Some("no satellites".to_string())).unwrap();
        assert_eq!(
            other.request().await,
            Err(GeolocationError::PositionUnavailable("no satellites".to_string()))
        );
    }

    #[tokio::test]
    async fn test_partial_or_invalid_report_fails() {
        let partial = ReportedPosition::from_parts(some("12.0"), None, None).unwrap();
        assert!(partial.request().await.is_err());

        let out_of_range = ReportedPosition::from_parts(some("120"), some("0"), None).unwrap();
        assert_eq!(
            out_of_range.request().await,
            Err(GeolocationError::InvalidPosition(CoordinateError::Latitude))
        );
    }

    #[tokio::test]
    async fn test_unparseable_axis_is_position_unavailable() {
        let garbled = ReportedPosition::from_parts(some("abc"), some("77.5"), None).unwrap();
        assert!(matches!(
            garbled.request().await,
            Err(GeolocationError::PositionUnavailable(_))
        ));
    }

    #[test]
    fn test_empty_report_means_no_capability() {
        assert!(ReportedPosition::from_parts(None, None, None).is_none());
        assert!(ReportedPosition::from_parts(None, None, some("  ")).is_none());
        assert!(ReportedPosition::from_parts(some(""), some(""), None).is_none());
    }
}
