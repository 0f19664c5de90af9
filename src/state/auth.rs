//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read this slice to coordinate login redirects. There is no
//! user-profile endpoint; "authenticated" means a credential is present in
//! the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state for route guards.
///
/// `authenticated` stays `None` until the client-side session check has
/// run, so guards can distinguish "still checking" from "signed out".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: Option<bool>,
}

impl AuthState {
    /// True only once the session check resolved with a credential present.
    pub fn is_authenticated(self) -> bool {
        self.authenticated == Some(true)
    }

    /// True while the initial session check has not run yet.
    pub fn is_pending(self) -> bool {
        self.authenticated.is_none()
    }
}
