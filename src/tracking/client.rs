//! Tracking lookups against the public API.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::tracking::types::TrackingRecord;

pub const TRACK_PATH: &str = "/api/v1/public/track/";

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Tracking number is empty")]
    EmptyNumber,

    #[error("Tracking number not found")]
    NotFound,

    #[error("Failed to load tracking information (status {status})")]
    Lookup { status: u16 },

    #[error("Tracking request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid tracking response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Trim and upper-case a user-entered tracking number.
pub fn normalize_number(number: &str) -> Result<String, TrackingError> {
    let number = number.trim().to_uppercase();
    if number.is_empty() {
        return Err(TrackingError::EmptyNumber);
    }
    Ok(number)
}

/// Looks up shipments through the router (or the API origin directly).
#[derive(Debug, Clone)]
pub struct TrackingClient {
    client: Client,
    base_url: String,
}

impl TrackingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn lookup_url(&self, number: &str) -> String {
        format!("{}{}{}", self.base_url, TRACK_PATH, number)
    }

    pub async fn lookup(&self, number: &str) -> Result<TrackingRecord, TrackingError> {
        let number = normalize_number(number)?;
        let url = self.lookup_url(&number);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TrackingError::Transport)?;

        match response.status() {
            status if status.is_success() => {
                response.json().await.map_err(TrackingError::Decode)
            }
            StatusCode::NOT_FOUND => Err(TrackingError::NotFound),
            status => Err(TrackingError::Lookup {
                status: status.as_u16(),
            }),
        }
    }
}
