//! Client configuration

use std::time::Duration;

/// Configuration for [`crate::ArtifactsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Timeout for individual HTTP requests.
    pub timeout: Duration,
    /// Total transport attempts per request (initial try + retries).
    /// Transport-level failures are retried; classified server errors are
    /// not.
    pub max_attempts: usize,
}

impl ClientConfig {
    /// Official API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.artifactsmmo.com";

    /// Configuration with defaults for everything but the token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            max_attempts: 2,
        }
    }

    /// Override the base URL (test servers, mirrors).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_official_api() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url, "https://api.artifactsmmo.com");
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_override() {
        let config = ClientConfig::new("token").with_base_url("http://localhost:9000");
        assert_eq!(config.base_url, "http://localhost:9000");
    }
}
