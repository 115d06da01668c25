//! Landing route that forwards to the dashboard or the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionSnapshot;

/// `/` — redirects by auth state once the session has resolved.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            let target = if state.is_authenticated() { "/dashboard" } else { "/login" };
            navigate(target, NavigateOptions::default());
        }
    });

    // Nothing to show while redirecting.
}
