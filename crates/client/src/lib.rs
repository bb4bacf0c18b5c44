//! # Artifacts Client
//!
//! Async client for the Artifacts MMO HTTP API.
//!
//! This crate contains:
//! - The authenticated HTTP transport (reqwest, bearer token, retry-once)
//! - The cooldown-synchronized action pipeline
//! - The per-session character snapshot store
//! - The read-only query facade (maps, items, monsters, tasks, ...)
//!
//! ## Architecture
//! - Domain types and the error taxonomy live in `artifacts-domain`
//! - All I/O goes through the [`Transport`] trait so tests can substitute
//!   a fake transport and a paused clock
//!
//! ## Example
//!
//! ```no_run
//! use artifacts_client::{ArtifactsClient, ClientConfig};
//!
//! # async fn run() -> artifacts_domain::Result<()> {
//! let client = ArtifactsClient::new(ClientConfig::new("my-api-token"))?;
//! client.bind_character("Zeph").await?;
//! client.actions().move_to(4, 1).await?; // waits out the cooldown
//! client.actions().bank_deposit_gold(100).await?;
//! # Ok(())
//! # }
//! ```

#![recursion_limit = "256"]

pub mod actions;
pub mod client;
pub mod config;
pub mod http;
pub mod queries;
pub mod snapshot;
pub mod transport;

// Re-export commonly used items
pub use actions::Actions;
pub use artifacts_domain::{
    classify_status, ApiError, CharacterSnapshot, EquipmentSlot, ErrorKind, Position, Result,
    Skill, StatusOutcome,
};
pub use client::{ArtifactsClient, ClientBuilder};
pub use config::ClientConfig;
pub use http::HttpTransport;
pub use snapshot::SnapshotStore;
pub use transport::{Method, Transport, WireResponse};
