//! Core engine types: seats, moves, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the rule engine,
//! and sessions.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use config::{DealOrder, FirstPlayer, GameConfig, Power, PowerRange};
pub use error::{CollabResult, CollaboratorError, GameError, Result};
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
