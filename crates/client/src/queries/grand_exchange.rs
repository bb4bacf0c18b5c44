//! Grand Exchange queries

use artifacts_domain::Result;
use serde_json::Value;

use super::QueryString;
use crate::client::ArtifactsClient;

/// Grand Exchange read endpoints.
pub struct GrandExchange<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> GrandExchange<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Transaction history for an item.
    pub async fn history(
        &self,
        code: &str,
        buyer: Option<&str>,
        seller: Option<&str>,
        page: u32,
    ) -> Result<Value> {
        let path = QueryString::new()
            .page(page)
            .push_opt("buyer", buyer)
            .push_opt("seller", seller)
            .apply(&format!("grandexchange/history/{code}"));
        self.client.get_data(&path).await
    }

    /// List open sell orders.
    pub async fn sell_orders(
        &self,
        code: Option<&str>,
        seller: Option<&str>,
        page: u32,
    ) -> Result<Value> {
        let path = QueryString::new()
            .page(page)
            .push_opt("code", code)
            .push_opt("seller", seller)
            .apply("grandexchange/orders");
        self.client.get_data(&path).await
    }

    /// A single sell order by id.
    pub async fn sell_order(&self, order_id: &str) -> Result<Value> {
        self.client.get_data(&format!("grandexchange/orders/{order_id}")).await
    }
}
