//! Leaderboard queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Leaderboard endpoints. These return the full paginated body, including
/// the pagination envelope.
pub struct Leaderboard<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Leaderboard<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Character leaderboard, optionally sorted (e.g. `"level"`, `"xp"`).
    pub async fn characters(&self, sort: Option<&str>, page: u32) -> Result<Value> {
        let path =
            QueryString::new().push_opt("sort", sort).page(page).apply("leaderboard/characters");
        self.client.get_json(&path).await
    }

    /// Account leaderboard, optionally sorted (e.g. `"points"`).
    pub async fn accounts(&self, sort: Option<&str>, page: u32) -> Result<Value> {
        let path =
            QueryString::new().push_opt("sort", sort).page(page).apply("leaderboard/accounts");
        self.client.get_json(&path).await
    }
}
