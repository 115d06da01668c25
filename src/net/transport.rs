//! HTTP transport for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin API proxy.
//! Server-side (SSR): a stub returning a network error, since the proxy is
//! only reachable from the browser.

use futures::future::LocalBoxFuture;

#[cfg(feature = "hydrate")]
use super::types::Method;
use super::types::{ApiError, ApiRequest, ApiResponse};

/// Sends one request and resolves one response.
///
/// The session pipeline is generic over this seam so tests can script
/// responses without a browser.
pub trait Transport {
    fn send(&self, req: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// `gloo-net` transport rooted at a base URL (normally `/api`).
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, req: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}{}", self.base_url, req.path);
            Box::pin(async move { send_browser(&url, &req).await })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Box::pin(futures::future::ready(Err(ApiError::Network(
                "not available on server".to_owned(),
            ))))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser(url: &str, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match req.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    if let Some(token) = &req.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    if let Some(tz) = &req.timezone {
        builder = builder.header("x-timezone", tz);
    }

    let response = match &req.body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    // Empty or non-JSON bodies (logout, signup) decode as null.
    let body = response
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);

    if (200..300).contains(&status) {
        Ok(ApiResponse { status, body })
    } else {
        let message = body
            .get("detail")
            .and_then(|v| v.as_str())
            .map(str::to_owned);
        Err(ApiError::from_status(status, message))
    }
}
