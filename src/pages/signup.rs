//! Signup page: account creation with best-effort auto-login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Trim name and email, require every field.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter name, email, and password.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Already-authenticated visitors go straight to the dashboard.
    let navigate_authed = navigate.clone();
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate_authed("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let (name_value, email_value, password_value) =
            match validate_signup_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) =
                    crate::net::auth::signup(&name_value, &email_value, &password_value).await
                {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                    return;
                }
                // Best-effort auto-login; fall back to the login route.
                match crate::net::auth::login(&email_value, &password_value).await {
                    Ok(_) => {
                        auth.update(|a| a.authenticated = Some(true));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(_) => {
                        navigate("/login", NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <p class="login-card__subtitle">"Sign up to get started"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Jane Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account…" } else { "Sign Up" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login" class="login-link">
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
