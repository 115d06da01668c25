//! Top navigation bar with the profile menu and logout action.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::state::profile::ProfileSnapshot;

/// Navigation bar shown on authenticated pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileSnapshot>>();
    let session = expect_context::<SessionContext>();
    let menu_open = RwSignal::new(false);

    let user_name = move || {
        profile
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move { session.logout().await });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">"Portal"</a>
            <div class="navbar__links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/projects">"Projects"</a>
                <a href="/tasks">"Tasks"</a>
            </div>
            <div class="navbar__profile">
                <button
                    class="navbar__profile-button"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="navbar__avatar"></span>
                    <span class="navbar__name">{user_name}</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="navbar__menu">
                        <a href="/profile">"Your Profile"</a>
                        <a href="/settings">"Settings"</a>
                        <button class="navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
