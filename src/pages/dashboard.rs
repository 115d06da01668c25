//! Placeholder dashboard behind the route guard.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;

/// `/dashboard` — protected landing area after login.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <div class="dashboard-page">
                <Navbar/>
                <main class="dashboard-page__main">
                    <h1>"Dashboard"</h1>
                    <div class="dashboard-page__grid">
                        <section class="dashboard-card">
                            <h2>"Quick Stats"</h2>
                            <p>"Your dashboard content here"</p>
                        </section>
                        <section class="dashboard-card">
                            <h2>"Recent Activity"</h2>
                            <p>"Activity feed goes here"</p>
                        </section>
                        <section class="dashboard-card">
                            <h2>"Tasks"</h2>
                            <p>"Your tasks list here"</p>
                        </section>
                    </div>
                </main>
            </div>
        </Protected>
    }
}
