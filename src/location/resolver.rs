//! Location resolution from settings

use super::provider::GeoProvider;
use crate::error::{AppError, Result};
use crate::settings::{LocationMode, Settings};
use log::{debug, warn};

/// A resolved location; derived per request, never persisted
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Geo { latitude: f64, longitude: f64 },
    City { city: String, country: String },
}

impl Location {
    pub fn label(&self) -> String {
        match self {
            Location::Geo { .. } => "Current location".to_string(),
            Location::City { city, country } => format!("{}, {}", city, country),
        }
    }
}

/// Resolve a location from settings, asking the provider at most once.
///
/// City mode requires a non-empty city and country. Geo mode falls back
/// to the configured city/country when the provider denies the request.
pub fn resolve_location(settings: &Settings, provider: &dyn GeoProvider) -> Result<Location> {
    if settings.location_mode != LocationMode::Geo {
        return city_location(settings)
            .ok_or_else(|| AppError::ConfigError("City/Country missing".to_string()));
    }

    match provider.current_position() {
        Ok(position) => {
            debug!("Resolved current position");
            Ok(Location::Geo {
                latitude: position.latitude,
                longitude: position.longitude,
            })
        }
        Err(e) => {
            warn!("Geolocation failed, trying configured city: {}", e);
            city_location(settings)
                .ok_or_else(|| AppError::LocationError("Geolocation denied".to_string()))
        }
    }
}

fn city_location(settings: &Settings) -> Option<Location> {
    if settings.city.is_empty() || settings.country.is_empty() {
        return None;
    }
    Some(Location::City {
        city: settings.city.clone(),
        country: settings.country.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::provider::mocks::MockGeoProvider;
    use super::*;

    fn city_settings(city: &str, country: &str) -> Settings {
        Settings {
            location_mode: LocationMode::City,
            city: city.to_string(),
            country: country.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_city_mode_builds_labeled_location() {
        let provider = MockGeoProvider::denied();
        let location = resolve_location(&city_settings("Cairo", "Egypt"), &provider).unwrap();
        assert_eq!(
            location,
            Location::City {
                city: "Cairo".to_string(),
                country: "Egypt".to_string(),
            }
        );
        assert_eq!(location.label(), "Cairo, Egypt");
    }

    #[test]
    fn test_geo_mode_label_is_current_location() {
        let provider = MockGeoProvider::granted(30.04, 31.24);
        let location = resolve_location(&Settings::default(), &provider).unwrap();
        assert_eq!(location.label(), "Current location");
    }

    #[test]
    fn test_geo_fallback_keeps_city_construction() {
        let mut settings = city_settings("Cairo", "Egypt");
        settings.location_mode = LocationMode::Geo;
        let provider = MockGeoProvider::denied();
        let location = resolve_location(&settings, &provider).unwrap();
        assert_eq!(location.label(), "Cairo, Egypt");
    }
}
