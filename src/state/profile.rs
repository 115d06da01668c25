//! Profile manager: fetches and caches the authenticated user's profile and
//! entitlement flag, following the session's auth transitions.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::api;
use crate::net::types::UserProfile;
use crate::state::session::{AuthStatus, Session};

/// Observable slice of profile state for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub user: Option<UserProfile>,
    pub has_access: Option<bool>,
    pub loading: bool,
}

struct ProfileInner {
    // Invariant: absent whenever the session is not Authenticated.
    user: Option<UserProfile>,
    has_access: Option<bool>,
    loading: bool,
}

/// Schedules a profile fetch onto the event loop. `leptos::task::spawn_local`
/// in the app; a drainable queue in tests.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Cloneable handle to the shared profile state.
#[derive(Clone)]
pub struct Profile {
    inner: Rc<RefCell<ProfileInner>>,
    listeners: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
    session: Session,
}

impl Profile {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ProfileInner {
                user: None,
                has_access: None,
                loading: true,
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
            session,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ProfileSnapshot {
        let inner = self.inner.borrow();
        ProfileSnapshot {
            user: inner.user.clone(),
            has_access: inner.has_access,
            loading: inner.loading,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.borrow().user.clone()
    }

    #[must_use]
    pub fn has_access(&self) -> Option<bool> {
        self.inner.borrow().has_access
    }

    /// Register a listener called after every observable state change.
    pub fn subscribe(&self, f: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    fn set_state(&self, user: Option<UserProfile>, has_access: Option<bool>, loading: bool) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed =
                inner.user != user || inner.has_access != has_access || inner.loading != loading;
            inner.user = user;
            inner.has_access = has_access;
            inner.loading = loading;
            changed
        };
        if changed {
            for listener in self.listeners.borrow().iter() {
                listener();
            }
        }
    }

    /// Fetch the current profile. Any failure clears the cached profile and
    /// entitlement, so no stale or partial data survives an error.
    pub async fn refresh(&self) {
        match api::whoami(&self.session).await {
            Ok(user) => {
                let has_access = Some(user.has_access);
                self.set_state(Some(user), has_access, false);
            }
            Err(err) => {
                log::warn!("profile fetch failed: {err}");
                self.set_state(None, None, false);
            }
        }
    }

    /// Drop the cached profile without a network call.
    pub fn clear(&self) {
        self.set_state(None, None, false);
    }

    /// Follow the session's auth transitions: schedule one `refresh` per
    /// transition into `Authenticated`, clear immediately on
    /// `Unauthenticated`.
    pub fn bind(&self, spawner: Spawner) {
        let profile = self.clone();
        let last_seen = Cell::new(self.session.status());
        self.session.clone().subscribe(move |status| {
            // Token rotations renotify with an unchanged status; only real
            // transitions matter here.
            if last_seen.get() == status {
                return;
            }
            last_seen.set(status);
            match status {
                AuthStatus::Authenticated => {
                    let profile = profile.clone();
                    spawner(async move { profile.refresh().await }.boxed_local());
                }
                AuthStatus::Unauthenticated => profile.clear(),
                AuthStatus::Unknown => {}
            }
        });
    }
}
