//! Login page: email/password form plus Google OAuth.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionContext;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::session::SessionSnapshot;
use crate::util::google;

/// Submit is enabled once both fields are non-empty.
fn credentials_present(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.trim().is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // Already signed in: straight to the dashboard.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    // Returning from the Google consent screen with ?code=… finishes the
    // OAuth exchange. Its error is shown verbatim.
    let query = use_query_map();
    Effect::new(move || {
        if let Some(code) = query.get().get("code") {
            #[cfg(feature = "hydrate")]
            {
                let session = session.get_value();
                leptos::task::spawn_local(async move {
                    match api::login_google(&session, &code).await {
                        Ok(token) => session.login(token),
                        Err(err) => error.set(err.to_string()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&code, &session);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if !credentials_present(&email_value, &password_value) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match api::login(&session, email_value.trim(), &password_value).await {
                    Ok(token) => session.login(token),
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set("Invalid email or password".to_owned());
                        email.set(String::new());
                        password.set(String::new());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&email_value, &password_value, &session);
    };

    let on_google = move |_| {
        if !google::begin_oauth() {
            error.set("Google login failed".to_owned());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <h2>"Sign in to your account"</h2>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !credentials_present(&email.get(), &password.get())
                    >
                        "Sign in"
                    </button>
                </form>

                <div class="auth-page__divider">"Or continue with"</div>
                <button class="btn btn--google" on:click=on_google>
                    "Login with Google"
                </button>

                <p class="auth-page__alt">
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
