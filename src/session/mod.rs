//! Game sessions: one match between two seats.
//!
//! ## Key Types
//!
//! - `GameSessionBuilder`: seats, hands or decks, seed
//! - `GameSession`: the turn state machine
//! - `MoveOutcome`: what a successful move changed

pub mod builder;
#[allow(clippy::module_inception)]
pub mod session;

pub use builder::GameSessionBuilder;
pub use session::{GameSession, MoveOutcome};
