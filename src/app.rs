//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::transport::{HttpTransport, Transport};
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::profile::Profile;
use crate::state::session::Session;
use crate::util::timezone;

/// Session manager handle shared through context.
pub type SessionContext = StoredValue<Session, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Portal"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Builds the managers, bridges them into signals, and declares routes.
///
/// Lives inside `Router` so the managers' navigation side effects go through
/// the router instead of full page loads. This is the single composition
/// point: everything below receives the managers via context.
#[component]
fn AppShell() -> impl IntoView {
    let nav = use_navigate();
    let navigate: Rc<dyn Fn(&str)> =
        Rc::new(move |path: &str| nav(path, NavigateOptions::default()));

    let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new("/api"));
    let session = Session::new(transport, navigate, timezone::client_timezone());
    let profile = Profile::new(session.clone());

    // Reactive mirrors of the managers for components to track.
    let auth_signal = RwSignal::new(session.snapshot());
    {
        let mirror = session.clone();
        session.subscribe(move |_| auth_signal.set(mirror.snapshot()));
    }
    let profile_signal = RwSignal::new(profile.snapshot());
    {
        let mirror = profile.clone();
        profile.subscribe(move || profile_signal.set(mirror.snapshot()));
    }

    // The profile follows auth transitions; the session resolves its initial
    // Unknown state with one silent refresh.
    #[cfg(feature = "hydrate")]
    {
        profile.bind(Rc::new(|fut: futures::future::LocalBoxFuture<'static, ()>| {
            leptos::task::spawn_local(fut);
        }));
        let session = session.clone();
        leptos::task::spawn_local(async move { session.bootstrap().await });
    }

    provide_context::<SessionContext>(StoredValue::new_local(session));
    provide_context(auth_signal);
    provide_context(profile_signal);

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("signup") view=SignupPage/>
            <Route path=StaticSegment("dashboard") view=DashboardPage/>
        </Routes>
    }
}
