//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use artifacts_client::{Method, Transport, WireResponse};
use artifacts_domain::{ApiError, Result, Skill};
use async_trait::async_trait;
use serde_json::{json, Value};

/// One request as seen by the fake transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted transport: responses are served in push order and every
/// request is recorded, so tests can assert the pipeline's exact call
/// sequence without a network.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<WireResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn push_response(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .expect("response queue poisoned")
            .push_back(Ok(WireResponse { status, body }));
    }

    /// Queue a transport-level failure for the next request.
    pub fn push_error(&self, err: ApiError) {
        self.responses.lock().expect("response queue poisoned").push_back(Err(err));
    }

    /// Every request made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<WireResponse> {
        self.calls.lock().expect("call log poisoned").push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .expect("response queue poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {method} {path}"))
    }
}

/// A complete character record as the character-fetch endpoint returns it.
pub fn character_record(name: &str, x: i32, y: i32, cooldown: u32) -> Value {
    let mut data = json!({
        "name": name,
        "level": 5, "xp": 120, "max_xp": 450, "gold": 80, "speed": 100,
        "hp": 115, "haste": 2, "critical_strike": 0, "stamina": 0,
        "attack_fire": 8, "attack_earth": 0, "attack_water": 0, "attack_air": 0,
        "dmg_fire": 0, "dmg_earth": 0, "dmg_water": 0, "dmg_air": 0,
        "res_fire": 0, "res_earth": 0, "res_water": 0, "res_air": 0,
        "x": x, "y": y,
        "cooldown": cooldown,
        "cooldown_expiration": "2024-11-01T12:00:00Z",
        "weapon_slot": "copper_dagger", "shield_slot": "", "helmet_slot": "",
        "body_armor_slot": "", "leg_armor_slot": "", "boots_slot": "",
        "ring1_slot": "", "ring2_slot": "", "amulet_slot": "",
        "artifact1_slot": "", "artifact2_slot": "", "artifact3_slot": "",
        "utility1_slot": "", "utility1_slot_quantity": 0,
        "utility2_slot": "", "utility2_slot_quantity": 0,
        "task": "", "task_type": "", "task_progress": 0, "task_total": 0,
        "inventory_max_items": 100,
        "inventory": [
            {"slot": 1, "code": "copper_ore", "quantity": 3},
        ],
    });
    let object = data.as_object_mut().expect("record is an object");
    for skill in Skill::ALL {
        object.insert(format!("{}_level", skill.as_str()), json!(1));
        object.insert(format!("{}_xp", skill.as_str()), json!(0));
        object.insert(format!("{}_max_xp", skill.as_str()), json!(150));
    }
    data
}

/// The character record wrapped in the API's `data` envelope.
pub fn character_payload(name: &str, x: i32, y: i32, cooldown: u32) -> Value {
    json!({ "data": character_record(name, x, y, cooldown) })
}

/// An error body in the API's envelope.
pub fn error_body(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}

/// Install a test subscriber so `RUST_LOG` controls test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
