//! Session manager: the auth state machine, the in-memory access token, and
//! the bearer/refresh request pipeline.
//!
//! LIFECYCLE
//! =========
//! The session starts `Unknown` and resolves to `Authenticated` or
//! `Unauthenticated` through the bootstrap silent refresh. After that only
//! an explicit `login` re-enters `Authenticated`, and only `logout` or a
//! failed refresh leaves it. The access token lives here and nowhere else;
//! it is never persisted.
//!
//! All state sits behind a cloneable handle (`Rc<RefCell<…>>`). Consumers
//! receive the handle from the composition root rather than reaching into a
//! global, and observe changes through `subscribe`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::api::{GOOGLE_LOGIN_PATH, LOGIN_PATH, LOGOUT_PATH, REFRESH_PATH};
use crate::net::transport::Transport;
use crate::net::types::{ApiError, ApiRequest, ApiResponse, Envelope, TokenResponse};

/// Tri-state authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Observable slice of session state for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: AuthStatus,
    pub loading: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}

/// Landing route after a successful login.
const AFTER_LOGIN_ROUTE: &str = "/dashboard";
/// Entry route for signed-out users.
const ENTRY_ROUTE: &str = "/login";

struct SessionInner {
    status: AuthStatus,
    // Invariant: present iff `status == Authenticated`.
    token: Option<String>,
    loading: bool,
}

type Listener = Box<dyn Fn(AuthStatus)>;

/// Cloneable handle to the shared session state.
#[derive(Clone)]
pub struct Session {
    inner: Rc<RefCell<SessionInner>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    transport: Rc<dyn Transport>,
    navigate: Rc<dyn Fn(&str)>,
    timezone: Option<String>,
}

impl Session {
    pub fn new(
        transport: Rc<dyn Transport>,
        navigate: Rc<dyn Fn(&str)>,
        timezone: Option<String>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                status: AuthStatus::Unknown,
                token: None,
                loading: true,
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
            transport,
            navigate,
            timezone,
        }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.inner.borrow().status
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        SessionSnapshot { status: inner.status, loading: inner.loading }
    }

    /// Register a listener called with the new status after every observable
    /// state change. Listeners must not subscribe re-entrantly.
    pub fn subscribe(&self, f: impl Fn(AuthStatus) + 'static) {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    fn set_state(&self, status: AuthStatus, token: Option<String>, loading: bool) {
        debug_assert!(token.is_none() || status == AuthStatus::Authenticated);
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.status != status || inner.token != token || inner.loading != loading;
            inner.status = status;
            inner.token = token;
            inner.loading = loading;
            changed
        };
        if changed {
            for listener in self.listeners.borrow().iter() {
                listener(status);
            }
        }
    }

    /// Accept a freshly issued token and enter the authenticated area.
    /// Repeated calls simply overwrite the token.
    pub fn login(&self, token: String) {
        self.set_state(AuthStatus::Authenticated, Some(token), false);
        (self.navigate)(AFTER_LOGIN_ROUTE);
    }

    /// Invalidate the session.
    ///
    /// The backend call is best effort; local state clears regardless, so
    /// this never fails.
    pub async fn logout(&self) {
        let request = ApiRequest::post(LOGOUT_PATH, serde_json::json!({}));
        if let Err(err) = self.send(request).await {
            log::warn!("logout request failed: {err}");
        }
        self.set_state(AuthStatus::Unauthenticated, None, false);
        (self.navigate)(ENTRY_ROUTE);
    }

    /// Obtain a fresh access token using the ambient refresh credential
    /// (the refresh cookie), without user interaction.
    ///
    /// Returns `None` instead of an error on failure: this runs during
    /// bootstrap and inside 401 recovery, where no caller could handle an
    /// `Err`.
    pub async fn silent_refresh(&self) -> Option<String> {
        let result = self.send(ApiRequest::get(REFRESH_PATH)).await;
        match result.and_then(|resp| resp.json::<TokenResponse>()) {
            Ok(TokenResponse { token }) => {
                self.set_state(AuthStatus::Authenticated, Some(token.clone()), false);
                Some(token)
            }
            Err(err) => {
                log::warn!("token refresh failed: {err}");
                self.set_state(AuthStatus::Unauthenticated, None, false);
                None
            }
        }
    }

    /// Resolve the initial `Unknown` state. Called once at startup.
    pub async fn bootstrap(&self) {
        self.silent_refresh().await;
    }

    /// Send a request through the bearer/refresh pipeline.
    ///
    /// The current token is attached as a bearer credential, re-read on
    /// every call. A 401 on a non-auth endpoint is recovered at most once:
    /// refresh, then re-issue the original request with the fresh token and
    /// return that result in the error's place. 429 and errors on the auth
    /// endpoints themselves always propagate unchanged, so a refresh can
    /// never trigger another refresh.
    ///
    /// # Errors
    ///
    /// Whatever the transport produced, after the one allowed recovery
    /// attempt; a 401 whose refresh failed surfaces as the original error.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut envelope = Envelope::new(request);
        let err = match self.dispatch(&envelope.request, self.token()).await {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };
        if err != ApiError::Unauthorized
            || envelope.retried
            || is_auth_endpoint(&envelope.request.path)
        {
            return Err(err);
        }
        envelope.retried = true;
        // Boxed: refresh and logout call back into `send`, and the cycle
        // would otherwise make this future infinitely sized.
        match Box::pin(self.silent_refresh()).await {
            // Retry with the token this refresh returned, not whatever is in
            // state by the time the retry dispatches.
            Some(token) => self.dispatch(&envelope.request, Some(token)).await,
            None => {
                Box::pin(self.logout()).await;
                Err(err)
            }
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        bearer: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = request.clone();
        request.bearer = bearer;
        if request.path != REFRESH_PATH {
            request.timezone = self.timezone.clone();
        }
        self.transport.send(request).await
    }
}

/// Endpoints whose failures must never trigger a nested refresh attempt.
fn is_auth_endpoint(path: &str) -> bool {
    matches!(path, LOGIN_PATH | GOOGLE_LOGIN_PATH | REFRESH_PATH | LOGOUT_PATH)
}
