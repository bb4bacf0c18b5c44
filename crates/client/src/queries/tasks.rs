//! Task queries

use artifacts_domain::{Result, Skill};
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Optional filters for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub skill: Option<Skill>,
    /// `"monsters"` or `"items"`.
    pub task_type: Option<String>,
    pub max_level: Option<u32>,
    pub min_level: Option<u32>,
}

/// Task endpoints.
pub struct Tasks<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// List tasks matching the filter.
    pub async fn all(&self, filter: &TaskFilter, page: u32) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("max_level", filter.max_level)
            .push_opt("min_level", filter.min_level)
            .push_opt("task_type", filter.task_type.as_deref())
            .push_opt("skill", filter.skill.map(Skill::as_str))
            .page(page)
            .apply("tasks/list");
        self.client.get_data(&path).await
    }

    /// A single task by code.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("tasks/list/{code}")).await
    }

    /// List task rewards.
    pub async fn rewards(&self, page: u32) -> Result<Value> {
        self.client.get_data(&QueryString::new().page(page).apply("tasks/rewards")).await
    }

    /// A single task reward by code.
    pub async fn reward(&self, code: &str) -> Result<Value> {
        self.client.get_data(&format!("tasks/rewards/{code}")).await
    }
}
