//! Route guard around protected content.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::profile::ProfileSnapshot;
use crate::state::session::SessionSnapshot;

/// What the guard renders for a given pair of manager snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A manager is still resolving; show a placeholder only.
    Loading,
    /// Resolved and unauthenticated; send the user to the entry page.
    RedirectLogin,
    /// Authenticated but the profile fetch failed; render nothing.
    Hidden,
    /// Render the protected content.
    Show,
}

/// Decide what to render. Pure so it can be tested without a DOM.
#[must_use]
pub fn guard_outcome(auth: &SessionSnapshot, profile: &ProfileSnapshot) -> GuardOutcome {
    if auth.loading || profile.loading {
        GuardOutcome::Loading
    } else if !auth.is_authenticated() {
        GuardOutcome::RedirectLogin
    } else if profile.user.is_none() {
        GuardOutcome::Hidden
    } else {
        GuardOutcome::Show
    }
}

/// Wraps protected content: a loading placeholder while the session and
/// profile resolve, a redirect to `/login` when unauthenticated, and an
/// empty render when the profile is missing.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionSnapshot>>();
    let profile = expect_context::<RwSignal<ProfileSnapshot>>();
    let navigate = use_navigate();

    // The redirect is an effect, not render output; re-triggering it on
    // re-render is harmless.
    Effect::new(move || {
        if guard_outcome(&auth.get(), &profile.get()) == GuardOutcome::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || match guard_outcome(&auth.get(), &profile.get()) {
        GuardOutcome::Loading => view! { <p class="guard__loading">"Loading..."</p> }.into_any(),
        GuardOutcome::RedirectLogin | GuardOutcome::Hidden => ().into_any(),
        GuardOutcome::Show => children().into_any(),
    }
}
