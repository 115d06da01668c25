//! Typed wrappers for the consumed backend endpoints.
//!
//! All calls go through `Session::send`, which attaches the bearer token and
//! timezone header and applies the 401 refresh-retry policy. Refresh and
//! logout are owned by the session manager itself.

use crate::net::types::{ApiError, ApiRequest, TokenResponse, UserProfile};
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/users/login";
pub const GOOGLE_LOGIN_PATH: &str = "/users/login/google";
pub const SIGNUP_PATH: &str = "/users/signup";
pub const REFRESH_PATH: &str = "/users/refresh";
pub const LOGOUT_PATH: &str = "/users/logout";
pub const WHOAMI_PATH: &str = "/users/whoami";

/// Exchange email/password credentials for an access token.
///
/// # Errors
///
/// Any non-success response; the login page surfaces it generically.
pub async fn login(session: &Session, email: &str, password: &str) -> Result<String, ApiError> {
    let request = ApiRequest::post(
        LOGIN_PATH,
        serde_json::json!({ "email": email, "password": password }),
    );
    let response = session.send(request).await?;
    Ok(response.json::<TokenResponse>()?.token)
}

/// Exchange a Google OAuth authorization code for an access token.
///
/// # Errors
///
/// Any non-success response; shown to the user verbatim.
pub async fn login_google(session: &Session, code: &str) -> Result<String, ApiError> {
    let request = ApiRequest::post(GOOGLE_LOGIN_PATH, serde_json::json!({ "code": code }));
    let response = session.send(request).await?;
    Ok(response.json::<TokenResponse>()?.token)
}

/// Create a new account. The backend returns no useful body on success.
///
/// # Errors
///
/// Any non-success response; the signup page surfaces it generically.
pub async fn signup(
    session: &Session,
    email: &str,
    name: &str,
    password: &str,
) -> Result<(), ApiError> {
    let request = ApiRequest::post(
        SIGNUP_PATH,
        serde_json::json!({ "email": email, "password": password, "name": name }),
    );
    session.send(request).await?;
    Ok(())
}

/// Fetch the authenticated user's profile.
///
/// # Errors
///
/// Any non-success response or a malformed body.
pub async fn whoami(session: &Session) -> Result<UserProfile, ApiError> {
    let response = session.send(ApiRequest::get(WHOAMI_PATH)).await?;
    response.json::<UserProfile>()
}
