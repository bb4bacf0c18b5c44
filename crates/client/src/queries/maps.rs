//! Map queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Optional filters for listing maps.
#[derive(Debug, Clone, Default)]
pub struct MapFilter {
    /// Filter by the content placed on the tile (e.g. `"copper_rocks"`).
    pub content_code: Option<String>,
    /// Filter by content type (e.g. `"monster"`, `"resource"`, `"bank"`).
    pub content_type: Option<String>,
}

/// Map endpoints.
pub struct Maps<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Maps<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List maps, optionally filtered by content.
    pub async fn all(&self, filter: &MapFilter, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("content_code", filter.content_code.as_deref())
            .push_opt("content_type", filter.content_type.as_deref())
            .page(page)
            .apply("maps");
        self.client.get_data(&path).await
    }

    /// The map tile at a coordinate.
    pub async fn get(&self, x: i32, y: i32) -> Result<Value> {
        self.client.get_data(&format!("maps/{x}/{y}")).await
    }
}
