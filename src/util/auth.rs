//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect
//! behavior, carrying a `next` parameter so login can return the user to
//! where they started.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login?next=<target>` whenever the session check has
/// resolved and no credential is present. Does nothing while the check is
/// still pending.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F, next: &'static str)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().authenticated == Some(false) {
            navigate(&format!("/login?next={next}"), NavigateOptions::default());
        }
    });
}
