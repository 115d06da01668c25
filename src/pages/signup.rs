//! Signup page with client-side validation and a success view.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::session::SessionSnapshot;
use crate::util::google;

/// Minimum password length accepted by the form.
const MIN_PASSWORD_LEN: usize = 8;

fn password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn form_valid(email: &str, name: &str, password: &str, confirm: &str, agreed: bool) -> bool {
    !email.trim().is_empty()
        && !name.trim().is_empty()
        && password_valid(password)
        && password == confirm
        && agreed
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);

    // Signed-in visitors have no business here, unless they just signed up
    // and are looking at the success view.
    Effect::new(move || {
        if auth.get().is_authenticated() && !success.get() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        let email_value = email.get_untracked();
        let name_value = name.get_untracked();
        let password_value = password.get_untracked();
        if !form_valid(
            &email_value,
            &name_value,
            &password_value,
            &confirm.get_untracked(),
            agreed.get_untracked(),
        ) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match api::signup(&session, email_value.trim(), name_value.trim(), &password_value)
                    .await
                {
                    Ok(()) => success.set(true),
                    Err(err) => {
                        log::warn!("signup failed: {err}");
                        error.set("Signup failed. Please try again.".to_owned());
                        email.set(String::new());
                        name.set(String::new());
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&email_value, &name_value, &password_value, &session);
    };

    let on_google = move |_| {
        if !google::begin_oauth() {
            error.set("Google signup failed".to_owned());
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || !success.get()
                fallback=|| {
                    view! {
                        <div class="auth-page__panel auth-page__panel--success">
                            <h3>"Account Created Successfully!"</h3>
                            <p>"Your account has been created. Click below to sign in."</p>
                            <a class="btn btn--primary" href="/login">"Sign in"</a>
                        </div>
                    }
                }
            >
                <div class="auth-page__panel">
                    <h2>"Create your account"</h2>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
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
                        <label class="auth-form__label">
                            "Confirm password"
                            <input
                                class="auth-form__input"
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>

                        <ul class="auth-form__hints">
                            <li class=move || hint_class(password_valid(&password.get()))>
                                "At least 8 characters"
                            </li>
                            <li class=move || {
                                hint_class(
                                    !password.get().is_empty() && password.get() == confirm.get(),
                                )
                            }>"Passwords match"</li>
                        </ul>

                        <label class="auth-form__terms">
                            <input
                                type="checkbox"
                                prop:checked=move || agreed.get()
                                on:change=move |ev| agreed.set(event_target_checked(&ev))
                            />
                            "I agree to the terms of service"
                        </label>

                        <Show when=move || !error.get().is_empty()>
                            <p class="auth-form__error">{move || error.get()}</p>
                        </Show>

                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || {
                                !form_valid(
                                    &email.get(),
                                    &name.get(),
                                    &password.get(),
                                    &confirm.get(),
                                    agreed.get(),
                                )
                            }
                        >
                            "Sign up"
                        </button>
                    </form>

                    <div class="auth-page__divider">"Or continue with"</div>
                    <button class="btn btn--google" on:click=on_google>
                        "Sign up with Google"
                    </button>

                    <p class="auth-page__alt">
                        <a href="/login">"Already have an account? Sign in"</a>
                    </p>
                </div>
            </Show>
        </div>
    }
}

fn hint_class(met: bool) -> &'static str {
    if met { "auth-form__hint auth-form__hint--met" } else { "auth-form__hint" }
}
