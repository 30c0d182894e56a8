//! Server-side loaders: read page query parameters, call the crime API once,
//! and hand the result to the page renderer.

use log::{debug, error, info};
use serde::Deserialize;

use crate::{
    api::{ApiError, CrimeApi, RadiusQuery, PING_PATH},
    models::{CrimeDump, PingResponse},
};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load crimes: {0}")]
    Crimes(#[from] ApiError),
}

/// Query parameters of the area page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AreaParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub year: Option<String>,
}

impl AreaParams {
    /// Radius query when lat, lng and radius are all present and non-empty
    pub fn radius_query(&self) -> Option<RadiusQuery> {
        Some(RadiusQuery {
            lat: non_empty(&self.lat)?,
            lng: non_empty(&self.lng)?,
            radius: non_empty(&self.radius)?,
            year: non_empty(&self.year),
        })
    }

    /// URL-encoded query string carrying the search parameters
    pub fn to_query(&self) -> String {
        [
            ("lat", &self.lat),
            ("lng", &self.lng),
            ("radius", &self.radius),
            ("year", &self.year),
        ]
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Result of the radius search made while loading the area page
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSearch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
    pub result: serde_json::Value,
}

/// Radius search loader.
///
/// Returns `None` when a required parameter is missing or when the backend
/// call fails; failures are logged and otherwise swallowed.
pub async fn load_area(api: &dyn CrimeApi, params: &AreaParams) -> Option<InitialSearch> {
    let query = params.radius_query()?;

    match api.crimes_in_radius(&query).await {
        Ok(result) => Some(InitialSearch {
            latitude: parse_float_prefix(&query.lat),
            longitude: parse_float_prefix(&query.lng),
            radius: parse_float_prefix(&query.radius),
            result,
        }),
        Err(e) => {
            error!("error loading initial search: {}", e);
            None
        }
    }
}

/// Reads the longest numeric prefix, so `"47.25abc"` is 47.25 and `"abc"` is `None`
fn parse_float_prefix(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if value[end..].starts_with("Infinity") {
        return value[..end + "Infinity".len()].parse().ok();
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    value[..end].parse().ok()
}

/// Crimes dump loader, fetches up to `limit` detail records
pub async fn load_crimes(api: &dyn CrimeApi, limit: u32) -> Result<Vec<CrimeDump>, LoadError> {
    let response = api.crime_details(limit).await?;
    info!("loaded {} crime detail records", response.crimes.len());
    Ok(response.crimes)
}

/// What the about page shows for the backend ping
#[derive(Debug, Clone, PartialEq)]
pub enum PingState {
    Loading,
    Success(Option<PingResponse>),
    Error(PingFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PingFailure {
    pub message: String,
    pub current_url: String,
    pub attempted: &'static str,
}

/// Ping loader; `current_url` is the page the request came from and ends up in the debug details
pub async fn load_ping(api: &dyn CrimeApi, current_url: &str) -> PingState {
    debug!("current url: {}", current_url);

    let state = match api.ping().await {
        Ok(ping) => PingState::Success(ping),
        Err(e) => {
            error!(
                "ping failed: current_url: {}, attempted: {}, error: {}",
                current_url, PING_PATH, e
            );
            PingState::Error(PingFailure {
                message: e.to_string(),
                current_url: current_url.to_string(),
                attempted: PING_PATH,
            })
        }
    };

    debug!("api call completed");
    state
}
