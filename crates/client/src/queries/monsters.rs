//! Monster queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Optional filters for listing monsters.
#[derive(Debug, Clone, Default)]
pub struct MonsterFilter {
    /// Only monsters dropping this item code.
    pub drop: Option<String>,
    pub max_level: Option<u32>,
    pub min_level: Option<u32>,
}

/// Monster endpoints.
pub struct Monsters<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Monsters<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List monsters matching the filter.
    pub async fn all(&self, filter: &MonsterFilter, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("max_level", filter.max_level)
            .push_opt("min_level", filter.min_level)
            .push_opt("drop", filter.drop.as_deref())
            .page(page)
            .apply("monsters");
        self.client.get_data(&path).await
    }

    /// A single monster by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("monsters/{code}")).await
    }
}
