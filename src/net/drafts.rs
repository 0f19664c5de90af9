//! Draft endpoints: upload, detail, list, delete, report generation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use super::api;
use super::error::ApiError;
use super::types::{DraftListItem, DraftRecord, ReportDownload};

#[cfg(feature = "hydrate")]
use crate::util::files;

#[cfg(any(test, feature = "hydrate"))]
fn draft_detail_endpoint(draft_id: &str) -> String {
    format!("/draft/drafts/{draft_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn draft_list_endpoint(limit: u32) -> String {
    format!("/draft/?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn draft_endpoint(draft_id: &str) -> String {
    format!("/draft/{draft_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn draft_report_endpoint(draft_id: &str) -> String {
    format!("/draft/{draft_id}/report")
}

#[cfg(any(test, feature = "hydrate"))]
fn draft_not_found_message(draft_id: &str) -> String {
    format!(
        "Draft not found (404): The draft with ID {draft_id} was not found or you don't have access to it."
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_not_found_message(draft_id: &str) -> String {
    format!(
        "Draft not found (404): The draft with ID {draft_id} was not found or has already been deleted."
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn report_not_found_message(draft_id: &str) -> String {
    format!("Report not found (404): Unable to generate report for draft {draft_id}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn default_report_filename(draft_id: &str) -> String {
    format!("draft_{draft_id}_report.pdf")
}

/// Pull the save-as filename out of a `Content-Disposition` header,
/// decoding RFC 5987 `UTF-8''` values and stripping plain quoting. Any
/// missing or undecodable value falls back to the supplied default.
#[cfg(any(test, feature = "hydrate"))]
fn extract_filename(content_disposition: Option<&str>, fallback: &str) -> String {
    let Some(header) = content_disposition else {
        return fallback.to_owned();
    };
    let Some(value) = filename_parameter(header) else {
        return fallback.to_owned();
    };
    let value = value.trim();
    if let Some(encoded) = strip_rfc5987_prefix(value) {
        return percent_encoding::percent_decode_str(encoded)
            .decode_utf8()
            .ok()
            .map(std::borrow::Cow::into_owned)
            .filter(|decoded| !decoded.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
    }
    let stripped = strip_quotes(value);
    if stripped.is_empty() {
        fallback.to_owned()
    } else {
        stripped.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn filename_parameter(header: &str) -> Option<&str> {
    header.split(';').find_map(|segment| {
        let trimmed = segment.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("filename*=") {
            return Some(&trimmed["filename*=".len()..]);
        }
        if lower.starts_with("filename=") {
            return Some(&trimmed["filename=".len()..]);
        }
        None
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn strip_rfc5987_prefix(value: &str) -> Option<&str> {
    const PREFIX_LEN: usize = "UTF-8''".len();
    // get() also rejects a multibyte char straddling the prefix boundary.
    let head = value.get(..PREFIX_LEN)?;
    if head.eq_ignore_ascii_case("UTF-8''") {
        Some(&value[PREFIX_LEN..])
    } else {
        None
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// `POST /draft/` (multipart `file`): upload a PDF draft.
///
/// The file is validated client-side (PDF MIME type, 20 MB cap) before any
/// network traffic.
///
/// # Errors
///
/// `Validation` on a rejected file, `NotAuthenticated` without a credential,
/// otherwise the shared status mapping.
#[cfg(feature = "hydrate")]
pub async fn upload(file: &web_sys::File) -> Result<DraftRecord, ApiError> {
    files::validate_draft_pdf(&file.name(), &file.type_(), file.size())
        .map_err(ApiError::Validation)?;
    let auth = api::require_auth()?;

    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build multipart form".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file to form".to_owned()))?;

    log::debug!("uploading draft {} ({} bytes)", file.name(), file.size());
    let response = gloo_net::http::Request::post(&api::api_url("/draft/"))
        .header("accept", "application/json")
        .header("Authorization", &auth)
        .body(form)
        .map_err(|e| api::transport_error(&e))?
        .send()
        .await
        .map_err(|e| api::transport_error(&e))?;
    let raw = api::read_response(response).await;
    if !raw.ok {
        return Err(raw.error(None, "Upload failed"));
    }
    raw.body
        .and_then(|body| serde_json::from_value(body).ok())
        .ok_or_else(|| ApiError::Api("Upload failed: unexpected response body".to_owned()))
}

/// `GET /draft/drafts/{id}`: fetch one draft with body and summary.
///
/// # Errors
///
/// `NotAuthenticated` without a credential, `NotFound` with draft-specific
/// wording on 404, otherwise the shared status mapping.
pub async fn get(draft_id: &str) -> Result<DraftRecord, ApiError> {
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get(&api::api_url(&draft_detail_endpoint(draft_id)))
            .header("accept", "application/json")
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(
                Some(draft_not_found_message(draft_id)),
                "Failed to fetch draft",
            ));
        }
        raw.body
            .and_then(|body| serde_json::from_value(body).ok())
            .ok_or_else(|| ApiError::Api("Failed to fetch draft: unexpected response body".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, draft_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `GET /draft/?limit=n`: list drafts, newest first per backend ordering.
///
/// A non-array body is coerced to an empty list.
///
/// # Errors
///
/// `NotAuthenticated` without a credential, otherwise the shared status
/// mapping.
pub async fn list(limit: u32) -> Result<Vec<DraftListItem>, ApiError> {
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get(&api::api_url(&draft_list_endpoint(limit)))
            .header("accept", "application/json")
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(None, "Failed to fetch drafts list"));
        }
        Ok(api::coerce_array(raw.body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, limit);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `DELETE /draft/{id}`: remove a draft. 204 carries no body; any other
/// status is parsed for error detail.
///
/// # Errors
///
/// `NotAuthenticated` without a credential, `NotFound` with delete-specific
/// wording on 404, otherwise the shared status mapping.
pub async fn delete(draft_id: &str) -> Result<(), ApiError> {
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::delete(&api::api_url(&draft_endpoint(draft_id)))
            .header("accept", "*/*")
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        if response.status() == 204 {
            return Ok(());
        }
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(
                Some(delete_not_found_message(draft_id)),
                "Failed to delete draft",
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, draft_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `POST /draft/{id}/report`: generate the sentiment report PDF.
///
/// The save-as filename comes from the `Content-Disposition` header,
/// falling back to `draft_<id>_report.pdf`.
///
/// # Errors
///
/// `Validation` on a blank id, `NotAuthenticated` without a credential,
/// otherwise the shared status mapping.
pub async fn generate_report(draft_id: &str) -> Result<ReportDownload, ApiError> {
    if draft_id.is_empty() {
        return Err(ApiError::Validation(
            "Draft ID is required to generate a report.".to_owned(),
        ));
    }
    let auth = api::require_auth()?;
    #[cfg(feature = "hydrate")]
    {
        let response =
            gloo_net::http::Request::post(&api::api_url(&draft_report_endpoint(draft_id)))
                .header("accept", "application/pdf")
                .header("Authorization", &auth)
                .send()
                .await
                .map_err(|e| api::transport_error(&e))?;
        if !response.ok() {
            let raw = api::read_response(response).await;
            return Err(raw.error(
                Some(report_not_found_message(draft_id)),
                "Failed to generate draft report",
            ));
        }
        let filename = extract_filename(
            response.headers().get("content-disposition").as_deref(),
            &default_report_filename(draft_id),
        );
        let bytes = response
            .binary()
            .await
            .map_err(|e| api::transport_error(&e))?;
        Ok(ReportDownload { bytes, filename })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
