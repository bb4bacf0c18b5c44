//! # Artifacts Domain
//!
//! Domain types and models for the Artifacts MMO API client.
//!
//! This crate contains:
//! - The character snapshot model (stats, skills, equipment, inventory)
//! - The error taxonomy and the status-code classifier
//! - The named map coordinate table
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; pure data structures and mappings

#![recursion_limit = "256"]

pub mod character;
pub mod content;
pub mod errors;

// Re-export commonly used items
pub use character::{
    CharacterSnapshot, EquipmentSet, EquipmentSlot, InventoryItem, Position, Skill, SkillProgress,
};
pub use errors::{classify_status, ApiError, ErrorKind, Result, StatusOutcome};
