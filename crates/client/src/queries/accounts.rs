//! Account-scoped queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Queries about other accounts.
pub struct Accounts<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Achievements of an account, optionally filtered by completion and
    /// type.
    pub async fn achievements(
        &self,
        account: &str,
        completed: Option<bool>,
        achievement_type: Option<&str>,
        page: u32,
    ) -> Result<Value> {
        let path = QueryString::new()
            .push_opt("completed", completed)
            .push_opt("achievement_type", achievement_type)
            .page(page)
            .apply(&format!("accounts/{account}/achievements"));
        self.client.get_json(&path).await
    }
}
