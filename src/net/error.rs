//! Failure taxonomy for the API client.
//!
//! Every variant renders as a human-readable message for view state; none of
//! them escapes a page handler uncaught. There is no retry policy anywhere —
//! each failure is terminal for its call and recovery is user-triggered.

use thiserror::Error;

/// Errors surfaced by the API client functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No credential is present; raised before any network call.
    #[error("Not authenticated: a bearer token is required. Sign in or set a token in Settings.")]
    NotAuthenticated,
    /// The backend rejected the credential (HTTP 401).
    #[error("Authentication failed (401): {0}. Check that your token is still valid.")]
    AuthFailed(String),
    /// The credential lacks permission (HTTP 403).
    #[error("Access forbidden (403): {0}.")]
    Forbidden(String),
    /// HTTP 404 with resource-specific wording.
    #[error("{0}")]
    NotFound(String),
    /// Client-side validation (file type/size) rejected the call.
    #[error("{0}")]
    Validation(String),
    /// Any other non-2xx response, detail embedded.
    #[error("{0}")]
    Api(String),
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),
}
