//! # tessera
//!
//! A turn-based card-placement game engine on a 3x3 board.
//!
//! ## Rules
//!
//! Two seats take turns placing a card from their hand on an empty cell.
//! Every card has a power on each of its four sides. A placed card flips
//! each adjacent opposing card whose facing side is strictly weaker; all
//! flips of one move are decided against the board as it was before the
//! move, and flipped cards never flip further cards. When the board is
//! full (or the seat to move has run out of cards) the seat owning more
//! cells wins; equal ownership is a draw.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: sessions are synchronous values. Every rule violation
//!    is a `GameError` and leaves the session untouched.
//!
//! 2. **Injected Collaborators**: card data, decks and results live behind
//!    `CatalogProvider` and `PersistenceSink`. `GameHost` is the only code
//!    that calls them.
//!
//! 3. **Deterministic**: a seed fixes shuffled deals and a random opener.
//!
//! ## Modules
//!
//! - `core`: Seats, moves, configuration, RNG, errors
//! - `cards`: Card definitions, hands, and the catalog
//! - `board`: Cells, directions, and the 3x3 grid
//! - `rules`: Capture resolution and game status
//! - `session`: The turn state machine and its builder
//! - `collab`: Collaborator traits and in-memory implementations
//! - `host`: Collaborator I/O around a session

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod session;
pub mod collab;
pub mod host;

// Re-export commonly used types
pub use crate::core::{
    Move, MoveRecord,
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, PowerRange, FirstPlayer, DealOrder,
    GameError, CollaboratorError, Result,
};

pub use crate::cards::{Card, CardId, Powers, Hand, CardCatalog};

pub use crate::board::{Board, CellIndex, Direction, PlacedCard, CELL_COUNT};

pub use crate::rules::{Captures, GameStatus, PlacementRules};

pub use crate::session::{GameSession, GameSessionBuilder, MoveOutcome};

pub use crate::collab::{
    CatalogProvider, InMemoryCatalog, JsonCatalog,
    PersistenceSink, InMemoryStore,
    PlayerIdentity, Role, UserId,
};

pub use crate::host::{GameHost, Seating};
