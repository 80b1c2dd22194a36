//! Geolocation provider seam
//!
//! The trait keeps the resolver testable; the shipped implementation
//! estimates the device position from its public IP address.

use crate::error::{AppError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Single-shot current-position query: one success or one failure outcome
pub trait GeoProvider {
    fn current_position(&self) -> Result<Coordinates>;
}

/// Public IP geolocation endpoint
const IP_LOOKUP_URL: &str = "http://ip-api.com/json/";

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Position estimated from the machine's public IP address
pub struct IpGeoProvider {
    lookup_url: String,
}

impl IpGeoProvider {
    pub fn new() -> Self {
        Self {
            lookup_url: IP_LOOKUP_URL.to_string(),
        }
    }

    pub fn with_lookup_url(lookup_url: impl Into<String>) -> Self {
        Self {
            lookup_url: lookup_url.into(),
        }
    }
}

impl Default for IpGeoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoProvider for IpGeoProvider {
    fn current_position(&self) -> Result<Coordinates> {
        let body = ureq::get(&self.lookup_url)
            .call()
            .map_err(|e| AppError::LocationError(format!("Position lookup failed: {}", e)))?
            .into_string()
            .map_err(|e| {
                AppError::LocationError(format!("Could not read lookup response: {}", e))
            })?;

        let response: IpLookupResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::LocationError(format!("Could not parse lookup response: {}", e))
        })?;

        if response.status != "success" {
            return Err(AppError::LocationError("Position unavailable".to_string()));
        }

        match (response.lat, response.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(AppError::LocationError("Position unavailable".to_string())),
        }
    }
}

/// Mock implementations for testing
/// Available in tests and with the "test-mocks" feature
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks {
    use super::*;

    /// Provider that reports a fixed position, or denies every request
    pub struct MockGeoProvider {
        pub position: Option<Coordinates>,
    }

    impl MockGeoProvider {
        pub fn granted(latitude: f64, longitude: f64) -> Self {
            Self {
                position: Some(Coordinates {
                    latitude,
                    longitude,
                }),
            }
        }

        pub fn denied() -> Self {
            Self { position: None }
        }
    }

    impl GeoProvider for MockGeoProvider {
        fn current_position(&self) -> Result<Coordinates> {
            self.position
                .ok_or_else(|| AppError::LocationError("Geolocation denied".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_response_parsing() {
        let body = r#"{"status": "success", "lat": 30.04, "lon": 31.24, "city": "Cairo"}"#;
        let response: IpLookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.lat, Some(30.04));
    }

    #[test]
    fn test_lookup_failure_status_parsing() {
        let body = r#"{"status": "fail", "message": "private range"}"#;
        let response: IpLookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "fail");
        assert!(response.lat.is_none());
    }
}
