//! Reqwest-backed transport
//!
//! Carries the bearer token and JSON content negotiation headers on every
//! request and retries transport-level failures (connection errors,
//! timeouts, undecodable bodies) up to the configured attempt count, two
//! by default. Non-success status codes are not retried; they are
//! returned to the caller for classification.

use artifacts_domain::{ApiError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::transport::{Method, Transport, WireResponse};

/// HTTP transport with built-in auth headers and single-retry support.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    max_attempts: usize,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or the
    /// token cannot be encoded into a header.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ApiError::config(format!("invalid base URL: {err}")))?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|err| ApiError::config(format!("invalid token: {err}")))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url, max_attempts: config.max_attempts.max(1) })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|err| ApiError::config(format!("invalid path {path}: {err}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<WireResponse> {
        let url = self.endpoint(path.trim_start_matches('/'))?;
        let mut last_err = ApiError::network("no attempt was made");

        for attempt in 1..=self.max_attempts {
            debug!(attempt, %method, %url, "sending HTTP request");

            let mut request = match method {
                Method::Get => self.client.get(url.clone()),
                Method::Post => self.client.post(url.clone()),
            };
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    match decode_body(response).await {
                        Ok(body) => {
                            debug!(attempt, %method, %url, status, "received HTTP response");
                            return Ok(WireResponse { status, body });
                        }
                        Err(err) => {
                            warn!(attempt, %url, error = %err, "undecodable response body");
                            last_err = err;
                        }
                    }
                }
                Err(err) => {
                    warn!(attempt, %url, error = %err, "HTTP request failed");
                    last_err = ApiError::network(err.to_string());
                }
            }
        }

        Err(last_err)
    }
}

/// Read and decode the response body; empty bodies decode to `null`.
async fn decode_body(response: reqwest::Response) -> Result<Value> {
    let text = response.text().await.map_err(|err| ApiError::network(err.to_string()))?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|err| ApiError::decode(err.to_string()))
}
