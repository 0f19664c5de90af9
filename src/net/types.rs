//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Identifiers arrive as strings in current backend revisions but older ones
//! emitted bare numbers, so id fields deserialize tolerantly through
//! `deserialize_string_from_value`. Optional sentiment fields default to
//! `None` rather than failing the whole record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /login/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `POST /login/register` response: the created user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// A draft with its full text body and optional AI summary.
///
/// Upload responses may omit `summary`/`user_id`; detail responses carry all
/// fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    pub draft: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_from_value")]
    pub user_id: Option<String>,
}

/// A list-view projection of a draft: possibly only `id` + `user_id` until
/// detail is fetched on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftListItem {
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub user_id: String,
    #[serde(default)]
    pub draft: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A stakeholder comment attached to exactly one draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub draft_id: String,
    pub comment: String,
    #[serde(default)]
    pub sentiment_analysis: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_from_value")]
    pub sentiment_score: Option<String>,
    #[serde(default)]
    pub sentiment_keywords: Option<String>,
}

/// `POST /comment/draft/{id}` request body.
///
/// Optional sentiment fields are omitted entirely when empty rather than
/// serialized as empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_keywords: Option<String>,
}

impl CreateCommentRequest {
    /// Build a request with all text fields trimmed and empty optional
    /// fields dropped.
    pub fn sanitized(
        comment: &str,
        sentiment_analysis: &str,
        sentiment_score: &str,
        sentiment_keywords: &str,
    ) -> Self {
        Self {
            comment: comment.trim().to_owned(),
            sentiment_analysis: non_empty(sentiment_analysis),
            sentiment_score: non_empty(sentiment_score),
            sentiment_keywords: non_empty(sentiment_keywords),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// A generated report: PDF bytes plus the filename to save them under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDownload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Envelope returned by the sentiment analysis endpoint.
///
/// `data` keeps the backend's object ordering (label insertion order drives
/// heatmap cell order).
#[derive(Clone, Debug, Deserialize)]
pub struct SentimentEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_optional_string_from_value<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string, number, or null")),
    }
}
