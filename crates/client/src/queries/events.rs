//! World event queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Event endpoints.
pub struct Events<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List all events.
    pub async fn all(&self, page: u32) -> Result<Value> {
        self.client.get_data(&QueryString::new().page(page).apply("events")).await
    }

    /// List currently active events.
    pub async fn active(&self, page: u32) -> Result<Value> {
        self.client.get_data(&QueryString::new().page(page).apply("events/active")).await
    }
}
