//! Comment endpoints: create, list, bulk CSV import.
//!
//! Comments belong to exactly one draft and are never updated or deleted
//! through this client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::api;
use super::error::ApiError;
use super::types::{CommentRecord, CreateCommentRequest};

#[cfg(feature = "hydrate")]
use crate::util::files;

#[cfg(any(test, feature = "hydrate"))]
fn comment_endpoint(draft_id: &str) -> String {
    format!("/comment/draft/{draft_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_list_endpoint(draft_id: &str, limit: u32) -> String {
    format!("/comment/draft/{draft_id}?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_csv_endpoint(draft_id: &str) -> String {
    format!("/comment/draft/{draft_id}/csv")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_not_found_message(draft_id: &str) -> String {
    format!("Comments not found (404): Unable to locate comments for draft {draft_id}.")
}

/// `POST /comment/draft/{id}`: attach one comment to a draft.
///
/// The payload should come from [`CreateCommentRequest::sanitized`] so text
/// fields are trimmed and empty optional fields are omitted.
///
/// # Errors
///
/// `Validation` on a blank draft id or empty comment text,
/// `NotAuthenticated` without a credential, otherwise the shared status
/// mapping.
pub async fn create(
    draft_id: &str,
    payload: CreateCommentRequest,
) -> Result<CommentRecord, ApiError> {
    if draft_id.is_empty() {
        return Err(ApiError::Validation(
            "Draft ID is required to create a comment.".to_owned(),
        ));
    }
    if payload.comment.trim().is_empty() {
        return Err(ApiError::Validation("Comment text is required.".to_owned()));
    }
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        log::debug!("creating comment for draft {draft_id}");
        let response = gloo_net::http::Request::post(&api::api_url(&comment_endpoint(draft_id)))
            .header("accept", "application/json")
            .header("Authorization", &auth)
            .json(&payload)
            .map_err(|e| api::transport_error(&e))?
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(None, "Failed to create comment"));
        }
        raw.body
            .and_then(|body| serde_json::from_value(body).ok())
            .ok_or_else(|| {
                ApiError::Api("Failed to create comment: unexpected response body".to_owned())
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, payload);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `GET /comment/draft/{id}?limit=n`: list a draft's comments.
///
/// A non-array body is coerced to an empty list.
///
/// # Errors
///
/// `Validation` on a blank draft id, `NotAuthenticated` without a
/// credential, `NotFound` with comment-specific wording on 404, otherwise
/// the shared status mapping.
pub async fn list(draft_id: &str, limit: u32) -> Result<Vec<CommentRecord>, ApiError> {
    if draft_id.is_empty() {
        return Err(ApiError::Validation(
            "Draft ID is required to fetch comments.".to_owned(),
        ));
    }
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        let response =
            gloo_net::http::Request::get(&api::api_url(&comment_list_endpoint(draft_id, limit)))
                .header("accept", "application/json")
                .header("Authorization", &auth)
                .send()
                .await
                .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(
                Some(comments_not_found_message(draft_id)),
                "Failed to fetch comments",
            ));
        }
        Ok(api::coerce_array(raw.body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, limit);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `POST /comment/draft/{id}/csv` (multipart `file`): bulk-import comments.
///
/// The file is validated client-side (`.csv` suffix, 10 MB cap) before any
/// network traffic. Returns the created comment records; a non-array body
/// is coerced to an empty list.
///
/// # Errors
///
/// `Validation` on a blank draft id or rejected file, `NotAuthenticated`
/// without a credential, otherwise the shared status mapping.
#[cfg(feature = "hydrate")]
pub async fn upload_csv(
    draft_id: &str,
    file: &web_sys::File,
) -> Result<Vec<CommentRecord>, ApiError> {
    if draft_id.is_empty() {
        return Err(ApiError::Validation(
            "Draft ID is required to upload comments.".to_owned(),
        ));
    }
    files::validate_comments_csv(&file.name(), file.size()).map_err(ApiError::Validation)?;
    let auth = api::require_auth()?;

    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build multipart form".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file to form".to_owned()))?;

    log::debug!(
        "uploading comments CSV for draft {draft_id}: {} ({} bytes)",
        file.name(),
        file.size()
    );
    let response = gloo_net::http::Request::post(&api::api_url(&comment_csv_endpoint(draft_id)))
        .header("accept", "application/json")
        .header("Authorization", &auth)
        .body(form)
        .map_err(|e| api::transport_error(&e))?
        .send()
        .await
        .map_err(|e| api::transport_error(&e))?;
    let raw = api::read_response(response).await;
    if !raw.ok {
        return Err(raw.error(None, "Failed to upload comments CSV"));
    }
    Ok(api::coerce_array(raw.body))
}
