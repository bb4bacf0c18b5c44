//! Error taxonomy for the Artifacts API client
//!
//! One [`ErrorKind`] per server-documented failure code plus a handful of
//! client-side kinds (transport, decoding, configuration, session state).
//! [`classify_status`] is the pure mapping from a wire status code to an
//! outcome; it is total over all codes.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Discriminant for every failure the client can surface.
///
/// Server-reported kinds map one-to-one onto the game API's status codes;
/// `Generic` preserves any code without a documented meaning. The trailing
/// kinds are produced client-side and never come from [`classify_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("not found")]
    NotFound,
    #[error("character not found")]
    CharacterNotFound,
    #[error("character in cooldown")]
    CharacterInCooldown,
    #[error("an action is already in progress")]
    ActionAlreadyInProgress,
    #[error("level too low")]
    TooLowLevel,
    #[error("inventory full")]
    InventoryFull,
    #[error("insufficient quantity")]
    InsufficientQuantity,
    #[error("insufficient gold")]
    InsufficientGold,
    #[error("grand exchange: too many orders")]
    GrandExchangeTooMany,
    #[error("grand exchange: no stock")]
    GrandExchangeNoStock,
    #[error("grand exchange: item not listed")]
    GrandExchangeNoItem,
    #[error("a transaction is already in progress")]
    TransactionInProgress,
    #[error("bank full")]
    BankFull,
    #[error("no task assigned")]
    TaskNoActiveTask,
    #[error("a task is already assigned")]
    TaskAlreadyAssigned,
    #[error("task not complete")]
    TaskNotComplete,
    #[error("task item missing")]
    TaskMissing,
    #[error("task already completed")]
    TaskAlreadyCompleted,
    #[error("item not recyclable")]
    ItemNotRecyclable,
    #[error("too many items for the equipment slot")]
    EquipmentTooMany,
    #[error("equipment already equipped")]
    EquipmentAlreadyEquipped,
    #[error("invalid equipment slot")]
    InvalidEquipmentSlot,
    #[error("auth token missing or empty")]
    AuthTokenMissing,
    #[error("server returned status {0}")]
    Generic(u16),

    // Client-side kinds, never produced by the classifier
    #[error("transport failure")]
    Network,
    #[error("malformed response")]
    Decode,
    #[error("invalid configuration")]
    Config,
    #[error("no character bound to the session")]
    SessionNotBound,
}

/// Outcome of classifying a non-success status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Non-fatal informational status (490): the call is treated as a
    /// success and the message is surfaced through logging only.
    Advisory,
    /// The call failed with the mapped error kind.
    Failed(ErrorKind),
}

/// Map a non-success HTTP status code to its outcome.
///
/// Total over all codes: anything without a documented meaning falls
/// through to [`ErrorKind::Generic`] carrying the raw code. Status 200 is
/// success and must not be passed here.
#[must_use]
pub fn classify_status(code: u16) -> StatusOutcome {
    let kind = match code {
        404 => ErrorKind::NotFound,
        452 => ErrorKind::AuthTokenMissing,
        461 | 483 => ErrorKind::TransactionInProgress,
        462 => ErrorKind::BankFull,
        473 => ErrorKind::ItemNotRecyclable,
        474 => ErrorKind::TaskMissing,
        475 => ErrorKind::TaskAlreadyCompleted,
        478 => ErrorKind::InsufficientQuantity,
        480 => ErrorKind::GrandExchangeNoStock,
        482 => ErrorKind::GrandExchangeNoItem,
        484 => ErrorKind::EquipmentTooMany,
        485 => ErrorKind::EquipmentAlreadyEquipped,
        486 => ErrorKind::ActionAlreadyInProgress,
        487 => ErrorKind::TaskNoActiveTask,
        488 => ErrorKind::TaskNotComplete,
        489 => ErrorKind::TaskAlreadyAssigned,
        490 => return StatusOutcome::Advisory,
        491 => ErrorKind::InvalidEquipmentSlot,
        493 | 496 => ErrorKind::TooLowLevel,
        497 => ErrorKind::InventoryFull,
        498 => ErrorKind::CharacterNotFound,
        499 => ErrorKind::CharacterInCooldown,
        other => ErrorKind::Generic(other),
    };
    StatusOutcome::Failed(kind)
}

/// A classified failure with diagnostic context.
///
/// Every error carries the character it concerns (`"-"` when no session is
/// bound), the UTC time it was constructed, and the server's message when
/// one was available, so multi-character orchestration can correlate
/// failures per character.
#[derive(Debug, Clone, Error)]
#[error("[{character}] {} - {kind}: {message}", .timestamp.format("%H:%M:%S"))]
pub struct ApiError {
    /// Which failure this is.
    pub kind: ErrorKind,
    /// Character the failed call was issued for.
    pub character: String,
    /// When the error was constructed.
    pub timestamp: DateTime<Utc>,
    /// Server-supplied message, or a client-side description.
    pub message: String,
}

impl ApiError {
    /// Construct an error bound to a character.
    pub fn new(kind: ErrorKind, character: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, character: character.into(), timestamp: Utc::now(), message: message.into() }
    }

    /// Construct an error with no character context.
    pub fn unbound(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, "-", message)
    }

    /// Transport-level failure (connection, timeout, request build).
    pub fn network(message: impl Into<String>) -> Self {
        Self::unbound(ErrorKind::Network, message)
    }

    /// Response body could not be decoded.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::unbound(ErrorKind::Decode, message)
    }

    /// Client construction or configuration failure.
    pub fn config(message: impl Into<String>) -> Self {
        Self::unbound(ErrorKind::Config, message)
    }

    /// No character snapshot has ever been fetched for this session.
    pub fn session_not_bound() -> Self {
        Self::unbound(ErrorKind::SessionNotBound, "call bind_character first")
    }
}
