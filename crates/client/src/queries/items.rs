//! Item queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Optional filters for listing items.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub craft_material: Option<String>,
    pub craft_skill: Option<String>,
    pub max_level: Option<u32>,
    pub min_level: Option<u32>,
    pub name: Option<String>,
    pub item_type: Option<String>,
}

/// Item endpoints.
pub struct Items<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Items<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List items matching the filter.
    pub async fn all(&self, filter: &ItemFilter, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("craft_material", filter.craft_material.as_deref())
            .push_opt("craft_skill", filter.craft_skill.as_deref())
            .push_opt("max_level", filter.max_level)
            .push_opt("min_level", filter.min_level)
            .push_opt("name", filter.name.as_deref())
            .push_opt("item_type", filter.item_type.as_deref())
            .page(page)
            .apply("items");
        self.client.get_data(&path).await
    }

    /// A single item by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("items/{code}")).await
    }
}
