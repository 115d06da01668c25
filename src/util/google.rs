//! Google OAuth authorization redirect (auth-code flow).
//!
//! The client id is baked in at build time from `GOOGLE_CLIENT_ID`. The
//! consent screen redirects back to `/login?code=…`, where the login page
//! exchanges the code for a token.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

/// Compile-time Google OAuth client id, if configured.
#[must_use]
pub fn client_id() -> Option<&'static str> {
    option_env!("GOOGLE_CLIENT_ID")
}

/// Build the authorization URL for the auth-code flow.
#[must_use]
pub fn authorize_url(client_id: &str, origin: &str) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth\
         ?client_id={client_id}\
         &redirect_uri={origin}/login\
         &response_type=code\
         &scope=openid%20email%20profile"
    )
}

/// Send the browser to the Google consent screen.
///
/// Returns `false` when no client id is configured or outside a browser.
pub fn begin_oauth() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = client_id() else {
            log::warn!("GOOGLE_CLIENT_ID not configured");
            return false;
        };
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(origin) = window.location().origin() else {
            return false;
        };
        window.location().set_href(&authorize_url(id, &origin)).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
