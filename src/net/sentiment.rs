//! Sentiment analysis endpoint.
//!
//! Served outside the `/api/v1` namespace with a `{success, data}` envelope;
//! label order in `data` drives heatmap cell order, so the envelope is
//! unpacked into ordered pairs rather than a keyed map.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod sentiment_test;

use super::error::ApiError;
use crate::util::sentiment::SentimentCounts;

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use super::types::SentimentEnvelope;

/// Default analysis endpoint path on the backend host.
pub const DEFAULT_ENDPOINT: &str = "/api/sentiment/analysis";

fn agent_endpoint(agent_id: &str) -> String {
    format!("/api/sentiment/agent/{agent_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn invalid_envelope_message() -> String {
    "Invalid response format from sentiment API".to_owned()
}

/// Unpack envelope data into ordered `(label, counts)` pairs, skipping
/// entries that do not parse as counts.
#[cfg(any(test, feature = "hydrate"))]
fn sentiment_pairs(
    data: serde_json::Map<String, serde_json::Value>,
) -> Vec<(String, SentimentCounts)> {
    data.into_iter()
        .filter_map(|(label, value)| {
            serde_json::from_value::<SentimentCounts>(value)
                .ok()
                .map(|counts| (label, counts))
        })
        .collect()
}

/// Fetch aggregated sentiment counts from the default analysis endpoint.
///
/// # Errors
///
/// Fails on transport errors, non-2xx statuses, or an envelope without
/// `success`/`data`.
pub async fn fetch() -> Result<Vec<(String, SentimentCounts)>, ApiError> {
    fetch_endpoint(DEFAULT_ENDPOINT).await
}

/// Fetch sentiment counts scoped to one agent or region.
///
/// # Errors
///
/// See [`fetch`].
pub async fn fetch_agent(agent_id: &str) -> Result<Vec<(String, SentimentCounts)>, ApiError> {
    fetch_endpoint(&agent_endpoint(agent_id)).await
}

/// Fetch aggregated sentiment counts from a specific endpoint path.
///
/// # Errors
///
/// See [`fetch`].
pub async fn fetch_endpoint(endpoint: &str) -> Result<Vec<(String, SentimentCounts)>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{endpoint}", api::api_base_url());
        let response = gloo_net::http::Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        if !response.ok() {
            return Err(ApiError::Api(format!(
                "HTTP error: status {}",
                response.status()
            )));
        }
        let envelope: SentimentEnvelope = response
            .json()
            .await
            .map_err(|_| ApiError::Api(invalid_envelope_message()))?;
        match envelope.data {
            Some(data) if envelope.success => Ok(sentiment_pairs(data)),
            _ => Err(ApiError::Api(invalid_envelope_message())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
