//! Error types for the engine and its collaborators.
//!
//! Every rule violation is a value: callers branch on the variant and
//! re-prompt. Nothing here is fatal, and the engine never retries.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;
use crate::collab::UserId;
use crate::rules::GameStatus;

/// Errors raised by the game core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {index} is outside the 3x3 board")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("no seat with index {index}")]
    InvalidSeat { index: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("game is over ({status})")]
    GameOver { status: GameStatus },

    #[error("{card} not found in catalog")]
    NotFound { card: CardId },

    #[error("invalid card {card}: {reason}")]
    InvalidCard { card: CardId, reason: String },

    #[error("duplicate card id {card}")]
    DuplicateCard { card: CardId },

    #[error("invalid deck: {reason}")]
    InvalidDeck { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("game is still in progress")]
    InProgress,

    /// A Catalog Provider or Persistence Sink failed; passed through as-is.
    #[error("collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// Errors raised by external collaborators (catalog and persistence).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{actor} is not allowed to {action}")]
    Forbidden { actor: UserId, action: &'static str },

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

pub type CollabResult<T> = std::result::Result<T, CollaboratorError>;
