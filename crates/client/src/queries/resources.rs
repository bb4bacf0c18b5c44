//! Resource node queries

use artifacts_domain::{Result, Skill};
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Optional filters for listing resource nodes.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    /// Only nodes dropping this item code.
    pub drop: Option<String>,
    pub max_level: Option<u32>,
    pub min_level: Option<u32>,
    /// Only nodes gathered with this skill.
    pub skill: Option<Skill>,
}

/// Resource endpoints.
pub struct Resources<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Resources<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List resource nodes matching the filter.
    pub async fn all(&self, filter: &ResourceFilter, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("max_level", filter.max_level)
            .push_opt("min_level", filter.min_level)
            .push_opt("drop", filter.drop.as_deref())
            .push_opt("skill", filter.skill.map(Skill::as_str))
            .page(page)
            .apply("resources");
        self.client.get_data(&path).await
    }

    /// A single resource node by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("resources/{code}")).await
    }
}
