//! Transport seam
//!
//! The pipeline never talks to reqwest directly; it goes through the
//! [`Transport`] trait so tests can inject a scripted transport and drive
//! the cooldown logic on a paused clock.

use std::fmt;

use artifacts_domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP method for an API call.
///
/// The API only uses GET for reads and POST for actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Raw outcome of an HTTP exchange: status code plus decoded JSON body.
///
/// Non-success statuses are returned here untouched; classification is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: Value,
}

impl WireResponse {
    /// The server's error message, when the body carries one.
    #[must_use]
    pub fn server_message(&self) -> String {
        self.body
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

/// Authenticated HTTP boundary.
///
/// Implementations perform the call (including any transport-level retry)
/// and return the status and decoded body; they fail only on
/// transport-level problems (connection, timeout, undecodable body).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one API call against the given path (relative to the base
    /// URL, no leading slash).
    async fn send(&self, method: Method, path: &str, body: Option<&Value>)
        -> Result<WireResponse>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn server_message_extraction() {
        let response = WireResponse {
            status: 499,
            body: json!({"error": {"code": 499, "message": "Character in cooldown"}}),
        };
        assert_eq!(response.server_message(), "Character in cooldown");

        let empty = WireResponse { status: 500, body: Value::Null };
        assert_eq!(empty.server_message(), "");
    }
}
