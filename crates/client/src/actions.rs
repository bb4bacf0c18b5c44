//! Action endpoints
//!
//! One method per mutating endpoint. Every call runs through the
//! pipeline in [`crate::client::ArtifactsClient::perform_action`]: no
//! client-side legality checks, unconditional snapshot refresh on
//! success, cooldown wait before control returns.

use artifacts_domain::{EquipmentSlot, Result};
use serde_json::{json, Value};

use crate::client::ArtifactsClient;

/// Facade over the bound character's action endpoints.
pub struct Actions<'a> {
    client: &'a ArtifactsClient,
}

impl<'a> Actions<'a> {
    pub(crate) fn new(client: &'a ArtifactsClient) -> Self {
        Self { client }
    }

    /// Move the character to a grid position.
    pub async fn move_to(&self, x: i32, y: i32) -> Result<Value> {
        self.client.perform_action("move", Some(json!({ "x": x, "y": y }))).await
    }

    /// Rest to regain HP.
    pub async fn rest(&self) -> Result<Value> {
        self.client.perform_action("rest", None).await
    }

    /// Equip an item into a slot.
    pub async fn equip(&self, code: &str, slot: EquipmentSlot, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "slot": slot.as_str(), "quantity": quantity });
        self.client.perform_action("equip", Some(body)).await
    }

    /// Unequip a slot.
    pub async fn unequip(&self, slot: EquipmentSlot, quantity: u32) -> Result<Value> {
        let body = json!({ "slot": slot.as_str(), "quantity": quantity });
        self.client.perform_action("unequip", Some(body)).await
    }

    /// Consume an item from the inventory.
    pub async fn use_item(&self, code: &str, quantity: u32) -> Result<Value> {
        self.client.perform_action("use", Some(json!({ "code": code, "quantity": quantity }))).await
    }

    /// Destroy an item from the inventory.
    pub async fn delete_item(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("delete-item", Some(body)).await
    }

    /// Fight the monster on the current tile.
    pub async fn fight(&self) -> Result<Value> {
        self.client.perform_action("fight", None).await
    }

    /// Gather the resource on the current tile.
    pub async fn gather(&self) -> Result<Value> {
        self.client.perform_action("gathering", None).await
    }

    /// Craft an item at the current workshop.
    pub async fn craft(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("craft", Some(body)).await
    }

    /// Recycle an item at the current workshop.
    pub async fn recycle(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("recycle", Some(body)).await
    }

    /// Deposit an item into the bank.
    pub async fn bank_deposit_item(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("bank/deposit", Some(body)).await
    }

    /// Deposit gold into the bank.
    pub async fn bank_deposit_gold(&self, amount: u64) -> Result<Value> {
        self.client.perform_action("bank/deposit/gold", Some(json!({ "amount": amount }))).await
    }

    /// Withdraw an item from the bank.
    pub async fn bank_withdraw_item(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("bank/withdraw", Some(body)).await
    }

    /// Withdraw gold from the bank.
    pub async fn bank_withdraw_gold(&self, amount: u64) -> Result<Value> {
        self.client.perform_action("bank/withdraw/gold", Some(json!({ "amount": amount }))).await
    }

    /// Buy a bank slot expansion.
    pub async fn bank_buy_expansion(&self) -> Result<Value> {
        self.client.perform_action("bank/buy_expansion", None).await
    }

    /// Buy from a Grand Exchange sell order.
    pub async fn ge_buy(&self, order_id: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "id": order_id, "quantity": quantity });
        self.client.perform_action("grandexchange/buy", Some(body)).await
    }

    /// Create a Grand Exchange sell order.
    pub async fn ge_create_sell_order(
        &self,
        code: &str,
        price: u64,
        quantity: u32,
    ) -> Result<Value> {
        let body = json!({ "code": code, "price": price, "quantity": quantity });
        self.client.perform_action("grandexchange/sell", Some(body)).await
    }

    /// Cancel one of the character's Grand Exchange sell orders.
    pub async fn ge_cancel_sell_order(&self, order_id: &str) -> Result<Value> {
        self.client.perform_action("grandexchange/cancel", Some(json!({ "id": order_id }))).await
    }

    /// Accept a new task from the taskmaster.
    pub async fn task_accept(&self) -> Result<Value> {
        self.client.perform_action("tasks/new", None).await
    }

    /// Turn in the completed task.
    pub async fn task_complete(&self) -> Result<Value> {
        self.client.perform_action("tasks/complete", None).await
    }

    /// Exchange task coins for a reward.
    pub async fn task_exchange(&self) -> Result<Value> {
        self.client.perform_action("tasks/exchange", None).await
    }

    /// Hand task items to the taskmaster.
    pub async fn task_trade(&self, code: &str, quantity: u32) -> Result<Value> {
        let body = json!({ "code": code, "quantity": quantity });
        self.client.perform_action("tasks/trade", Some(body)).await
    }

    /// Abandon the current task.
    pub async fn task_cancel(&self) -> Result<Value> {
        self.client.perform_action("tasks/cancel", None).await
    }
}
