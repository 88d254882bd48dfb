//! Game rules: placement, capture resolution, and session status.
//!
//! The rule engine is stateless. Sessions own the board and call into
//! `PlacementRules` for every validated move.

pub mod placement;
pub mod status;

pub use placement::{Captures, PlacementRules};
pub use status::GameStatus;
