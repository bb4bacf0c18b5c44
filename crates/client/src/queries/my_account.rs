//! Authenticated account queries
//!
//! Reads scoped to the token's own account: bank contents, Grand Exchange
//! orders and history, account details.

use artifacts_domain::Result;
use serde_json::Value;

use crate::client::ArtifactsClient;

/// `my/*` read endpoints.
pub struct MyAccount<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> MyAccount<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Bank gold and slot details.
    pub async fn bank_details(&self) -> Result<Value> {
        self.client.get_json("my/bank").await
    }

    /// Items stored in the bank.
    pub async fn bank_items(&self) -> Result<Value> {
        self.client.get_json("my/bank/items").await
    }

    /// The account's open Grand Exchange sell orders.
    pub async fn ge_sell_orders(&self) -> Result<Value> {
        self.client.get_json("my/grandexchange/orders").await
    }

    /// The account's Grand Exchange sell history.
    pub async fn ge_sell_history(&self) -> Result<Value> {
        self.client.get_json("my/grandexchange/history").await
    }

    /// Account details.
    pub async fn details(&self) -> Result<Value> {
        self.client.get_json("my/details").await
    }
}
