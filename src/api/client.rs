//! Blocking client for the AlAdhan REST API

use super::types::{CalendarEntry, MethodRecord, TimingsData};
use crate::error::{AppError, Result};
use crate::location::Location;
use crate::settings::Settings;
use log::debug;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Base endpoint of the public AlAdhan API
pub const API_BASE: &str = "https://api.aladhan.com/v1";

/// Embedded application status the API reports on success
const API_OK: i64 = 200;

pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Prayer timings for today at the resolved location
    pub fn timings(&self, settings: &Settings, location: &Location) -> Result<TimingsData> {
        let mut params = calculation_params(settings);
        let endpoint = match location {
            Location::Geo { .. } => "timings",
            Location::City { .. } => "timingsByCity",
        };
        push_location_params(&mut params, location);
        self.fetch(endpoint, &params)
    }

    /// Per-day calendar entries for the given month and year
    pub fn calendar(
        &self,
        settings: &Settings,
        location: &Location,
        month: u32,
        year: i32,
    ) -> Result<Vec<CalendarEntry>> {
        let mut params = calculation_params(settings);
        push_param(&mut params, "month", month.to_string());
        push_param(&mut params, "year", year.to_string());
        let endpoint = match location {
            Location::Geo { .. } => "calendar",
            Location::City { .. } => "calendarByCity",
        };
        push_location_params(&mut params, location);
        self.fetch(endpoint, &params)
    }

    /// Raw calculation-method catalog, keyed by the API's short codes
    pub fn methods(&self) -> Result<HashMap<String, MethodRecord>> {
        self.fetch("methods", &[])
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} ({} params)", url, params.len());

        let mut request = ureq::get(&url);
        for (key, value) in params {
            request = request.query(key, value);
        }

        let body = request.call()?.into_string().map_err(|e| {
            AppError::ApiError(format!("Could not read response: {}", e))
        })?;

        parse_envelope(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap the `{code, data}` envelope; a non-200 embedded code is a
/// failure even when the transport succeeded
fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let code = value.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
    if code != API_OK {
        return Err(AppError::ApiError(format!("API returned status {}", code)));
    }

    let data = value
        .get("data")
        .cloned()
        .ok_or_else(|| AppError::ApiError("Response missing data field".to_string()))?;

    serde_json::from_value(data).map_err(AppError::from)
}

/// Common method/school/adjustment parameters
fn calculation_params(settings: &Settings) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    push_param(&mut params, "method", settings.method.clone());
    push_param(&mut params, "school", settings.school.clone());
    push_param(&mut params, "adjustment", settings.hijri_adjustment.clone());
    params
}

fn push_location_params(params: &mut Vec<(&'static str, String)>, location: &Location) {
    match location {
        Location::Geo {
            latitude,
            longitude,
        } => {
            push_param(params, "latitude", latitude.to_string());
            push_param(params, "longitude", longitude.to_string());
        }
        Location::City { city, country } => {
            push_param(params, "city", city.clone());
            push_param(params, "country", country.clone());
        }
    }
}

/// Append a query parameter, omitting empty values entirely
fn push_param(params: &mut Vec<(&'static str, String)>, key: &'static str, value: String) {
    if !value.is_empty() {
        params.push((key, value));
    }
}
