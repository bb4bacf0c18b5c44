//! Achievement queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Achievement endpoints.
pub struct Achievements<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Achievements<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List achievements, optionally by type.
    pub async fn all(&self, achievement_type: Option<&str>, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("achievement_type", achievement_type)
            .page(page)
            .apply("achievements");
        self.client.get_data(&path).await
    }

    /// A single achievement by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("achievements/{code}")).await
    }
}
