pub mod error;

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config;

pub use error::ApiError;
pub use reqwest::Method;

use reqwest::{header, Client, StatusCode};

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Async client for the minifeed REST API.
///
/// Holds the base URL, resolved once at construction, and a shared
/// `reqwest::Client`. Cloning is cheap; every request is a single round
/// trip with no caching, deduplication or retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at the base URL from the environment, for harnesses
    /// that redirect the API.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request against the API.
    ///
    /// `path` is the resource path, beginning with `/`, resolved against the
    /// base URL. `body`, when present, is serialized as the JSON request
    /// body. A 200 response is deserialized into `T`; any other status maps
    /// to an HTTP error carrying the status code and the `error` field of
    /// the response body.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug_assert!(path.starts_with('/'), "API path must begin with '/'");
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::OK {
            return Ok(serde_json::from_slice(&bytes)?);
        }
        Err(http_error(status, &bytes))
    }
}

/// Map a non-200 response to the matching error variant, pulling the
/// user-facing message out of the `{"error": ...}` envelope. Falls back to
/// the raw body when the envelope is missing.
fn http_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error,
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    };
    let status = status.as_u16();
    if (500..600).contains(&status) {
        ApiError::Server { status, message }
    } else {
        ApiError::Client { status, message }
    }
}
