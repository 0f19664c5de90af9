//! Shared request/response plumbing for the REST client.
//!
//! ERROR HANDLING
//! ==============
//! Response bodies are always read as text first and JSON-parsed when
//! non-empty; a parse failure means "no structured body", never a separate
//! error. Non-2xx statuses map onto the `ApiError` taxonomy with a
//! `message`/`detail`/`error` body key supplying the human-readable detail.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::ApiError;
use crate::session;

const DEFAULT_API_BASE_URL: &str = "https://api.lexalytics.me";

/// Fixed path namespace shared by every backend resource.
pub(crate) const API_PREFIX: &str = "/api/v1";

/// Backend base URL, compiled in via `ECONSULT_API_BASE_URL`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("ECONSULT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Absolute URL for a path under the `/api/v1` namespace.
pub fn api_url(path: &str) -> String {
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("{}{API_PREFIX}{sep}{path}", api_base_url())
}

/// First string value among the fixed detail keys of an error body.
pub(crate) fn extract_detail(payload: &Value) -> Option<String> {
    let object = payload.as_object()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str).map(str::to_owned))
}

/// JSON-parse a body read as text; empty text or unparseable content is
/// "no structured body".
pub(crate) fn parse_body(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// Body detail, falling back to `HTTP <status>: <status text>`.
pub(crate) fn detail_or_status(body: Option<&Value>, status: u16, status_text: &str) -> String {
    body.and_then(extract_detail)
        .unwrap_or_else(|| format!("HTTP {status}: {status_text}"))
}

/// Map a non-2xx status onto the error taxonomy.
///
/// 401 and 403 are uniform across resources; the 404 wording and the
/// generic-failure context differ per operation.
pub(crate) fn error_for_status(
    status: u16,
    detail: String,
    not_found: Option<String>,
    context: &str,
) -> ApiError {
    match status {
        401 => ApiError::AuthFailed(detail),
        403 => ApiError::Forbidden(detail),
        404 => match not_found {
            Some(message) => ApiError::NotFound(message),
            None => ApiError::Api(format!("{context}: {detail}")),
        },
        _ => ApiError::Api(format!("{context}: {detail}")),
    }
}

/// Ambient-credential precondition for protected operations: the formatted
/// `Authorization` value, or `NotAuthenticated` before any network traffic.
pub(crate) fn require_auth() -> Result<String, ApiError> {
    session::shared()
        .auth_header()
        .map(|(_, value)| value)
        .ok_or(ApiError::NotAuthenticated)
}

/// Defensively coerce a list body: a non-array value yields an empty list
/// and malformed entries are skipped rather than failing the batch.
pub(crate) fn coerce_array<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Vec<T> {
    match body {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// A response reduced to what the error mapping needs: status line plus the
/// text-then-JSON parsed body.
#[cfg(feature = "hydrate")]
pub(crate) struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub ok: bool,
    pub body: Option<Value>,
}

#[cfg(feature = "hydrate")]
impl RawResponse {
    pub fn detail(&self) -> String {
        detail_or_status(self.body.as_ref(), self.status, &self.status_text)
    }

    pub fn error(&self, not_found: Option<String>, context: &str) -> ApiError {
        error_for_status(self.status, self.detail(), not_found, context)
    }
}

#[cfg(feature = "hydrate")]
pub(crate) async fn read_response(response: gloo_net::http::Response) -> RawResponse {
    let status = response.status();
    let status_text = response.status_text();
    let ok = response.ok();
    let text = response.text().await.unwrap_or_default();
    let body = parse_body(&text);
    log::debug!("response {status} {status_text}, body: {} bytes", text.len());
    RawResponse {
        status,
        status_text,
        ok,
        body,
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn transport_error(source: &gloo_net::Error) -> ApiError {
    ApiError::Transport(source.to_string())
}
