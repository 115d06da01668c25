//! Request/response envelope and the backend error taxonomy.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;

/// HTTP method of an API request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing API request.
///
/// `bearer` and `timezone` map to the `Authorization: Bearer …` and
/// `x-timezone` headers on the wire. Both are attached by the session
/// pipeline, not by callers.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
    pub timezone: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            body: None,
            bearer: None,
            timezone: None,
        }
    }

    #[must_use]
    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_owned(),
            body: Some(body),
            bearer: None,
            timezone: None,
        }
    }
}

/// Tracks whether a request chain has already been retried after a 401.
///
/// The flag lives on this wrapper rather than on a shared request object, so
/// every chain carries its own retry state.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub request: ApiRequest,
    pub retried: bool,
}

impl Envelope {
    #[must_use]
    pub fn new(request: ApiRequest) -> Self {
        Self { request, retried: false }
    }
}

/// A successful response with its decoded JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Decode the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
    }
}

/// Error taxonomy for backend calls.
///
/// 429 and 401 get their own variants because the session pipeline treats
/// them specially; everything else is either a transport failure or a
/// generic non-success status.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rate limited")]
    RateLimited,
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// Map a non-success HTTP status onto the taxonomy.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            _ => Self::Status { status, message },
        }
    }
}

/// The authenticated user's profile, as returned by `GET /users/whoami`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub has_access: bool,
}

/// Body of the token-bearing auth responses (login, refresh).
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
