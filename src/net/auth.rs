//! Auth endpoints: login, signup, logout.
//!
//! Login and signup are the only operations that issue requests without a
//! credential. A successful login persists the returned credential into the
//! shared session as a side effect; signup returns the created user record
//! and does not authenticate.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use crate::session::{self, Credential};

use super::types::UserRecord;

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use super::types::TokenResponse;
#[cfg(feature = "hydrate")]
use crate::util::text::mask_token;

/// Backends report the scheme in mixed case; anything spelled "bearer"
/// canonicalizes, other schemes pass through untouched.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_token_type(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("bearer");
    if value.eq_ignore_ascii_case("bearer") {
        "bearer".to_owned()
    } else {
        value.to_owned()
    }
}

/// `POST /login/login`: exchange email + password for a credential.
///
/// # Errors
///
/// Fails on transport errors, non-2xx statuses, or a 2xx body without an
/// `access_token`.
pub async fn login(email: &str, password: &str) -> Result<Credential, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let response = gloo_net::http::Request::post(&api::api_url("/login/login"))
            .header("accept", "application/json")
            .json(&payload)
            .map_err(|e| api::transport_error(&e))?
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(None, "Login failed"));
        }
        let token: TokenResponse = raw
            .body
            .and_then(|body| serde_json::from_value(body).ok())
            .ok_or_else(|| ApiError::Api("Invalid response from login endpoint".to_owned()))?;
        let token_type = normalize_token_type(token.token_type.as_deref());
        let credential = Credential::new(token.access_token, Some(&token_type));
        session::shared().set_token(&credential.token, Some(&credential.token_type));
        log::debug!(
            "login: token saved {} type: {}",
            mask_token(&credential.token),
            credential.token_type
        );
        Ok(credential)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `POST /login/register`: create an account.
///
/// # Errors
///
/// Fails on transport errors, non-2xx statuses, or an unexpected body.
pub async fn signup(username: &str, email: &str, password: &str) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        let response = gloo_net::http::Request::post(&api::api_url("/login/register"))
            .header("accept", "application/json")
            .json(&payload)
            .map_err(|e| api::transport_error(&e))?
            .send()
            .await
            .map_err(|e| api::transport_error(&e))?;
        let raw = api::read_response(response).await;
        if !raw.ok {
            return Err(raw.error(None, "Signup failed"));
        }
        raw.body
            .and_then(|body| serde_json::from_value(body).ok())
            .ok_or_else(|| ApiError::Api("Invalid response from signup endpoint".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Drop the local credential. No network call: the backend holds no
/// server-side session state for this client.
pub fn logout() {
    session::shared().clear();
}
