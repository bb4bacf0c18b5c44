//! Character management
//!
//! Account-scoped creation and deletion. These POST endpoints are not
//! bound-character actions: no cooldown, no snapshot refresh.

use artifacts_domain::Result;
use serde_json::{json, Value};

use crate::client::ArtifactsClient;

/// Character management endpoints.
pub struct Characters<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Characters<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Create a character with the given name and skin.
    pub async fn create(&self, name: &str, skin: &str) -> Result<Value> {
        self.client.post_json("characters/create", json!({ "name": name, "skin": skin })).await
    }

    /// Delete a character by name.
    pub async fn delete(&self, name: &str) -> Result<Value> {
        self.client.post_json("characters/delete", json!({ "name": name })).await
    }
}
