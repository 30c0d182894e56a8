use async_trait::async_trait;
use axum::body::Bytes;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::{CrimeDumpResponse, PingResponse};

pub const PING_PATH: &str = "/api/ping";
pub const RADIUS_PATH: &str = "/api/public/crimes/radius";
pub const DETAILS_PATH: &str = "/api/public/crimes/details";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("Failed to reach crime API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to decode crime API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Radius search parameters, kept as the raw strings from the page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusQuery {
    pub lat: String,
    pub lng: String,
    pub radius: String,
    pub year: Option<String>,
}

impl RadiusQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("lat", self.lat.as_str()),
            ("lng", self.lng.as_str()),
            ("radius", self.radius.as_str()),
        ];
        if let Some(year) = &self.year {
            pairs.push(("year", year.as_str()));
        }
        pairs
    }
}

/// Read-only view of the crime backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrimeApi: Send + Sync {
    /// `GET /api/ping`; a `null` body is a success without data
    async fn ping(&self) -> Result<Option<PingResponse>, ApiError>;
    /// `GET /api/public/crimes/radius`, body passed through untouched
    async fn crimes_in_radius(&self, query: &RadiusQuery) -> Result<serde_json::Value, ApiError>;
    /// `GET /api/public/crimes/details?limit=N`
    async fn crime_details(&self, limit: u32) -> Result<CrimeDumpResponse, ApiError>;
}

pub struct HttpCrimeApi {
    client: Client,
    base_url: String,
}

impl HttpCrimeApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_bytes(&self, path: &str, query: &[(&str, &str)]) -> Result<Bytes, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("requesting: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("error sending request to {}: {}", url, e);
                ApiError::from(e)
            })?;

        log_response(&response);

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            };
            error!("error response from {}: {}", url, err);
            return Err(err);
        }

        response.bytes().await.map_err(|e| {
            error!("error reading body from {}: {}", url, e);
            ApiError::from(e)
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let body = self.get_bytes(path, query).await?;
        serde_json::from_slice(&body).map_err(|e| {
            error!("error decoding body from {}: {}", path, e);
            ApiError::from(e)
        })
    }
}

fn log_response(response: &Response) {
    debug!(
        "response received: status: {}, status_text: {}, headers: {:?}, url: {}",
        response.status().as_u16(),
        response.status().canonical_reason().unwrap_or_default(),
        response.headers(),
        response.url()
    );
}

#[async_trait]
impl CrimeApi for HttpCrimeApi {
    async fn ping(&self) -> Result<Option<PingResponse>, ApiError> {
        self.get_json(PING_PATH, &[]).await
    }

    async fn crimes_in_radius(&self, query: &RadiusQuery) -> Result<serde_json::Value, ApiError> {
        self.get_json(RADIUS_PATH, &query.to_pairs()).await
    }

    async fn crime_details(&self, limit: u32) -> Result<CrimeDumpResponse, ApiError> {
        let limit = limit.to_string();
        self.get_json(DETAILS_PATH, &[("limit", limit.as_str())])
            .await
    }
}
