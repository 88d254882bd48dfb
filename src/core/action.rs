//! Move representation: who places which card where.
//!
//! A `Move` is the request a caller submits to a session. A `MoveRecord`
//! is what the session keeps after the move succeeded, including the
//! cells it captured.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::CellIndex;
use crate::cards::CardId;
use crate::rules::Captures;

/// A placement request.
///
/// ```
/// use tessera::board::CellIndex;
/// use tessera::cards::CardId;
/// use tessera::core::{Move, PlayerId};
///
/// let mv = Move::new(PlayerId::ONE, CardId::new(3), CellIndex::CENTER);
/// assert_eq!(mv.cell.index(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Seat making the move.
    pub player: PlayerId,

    /// Card to take from the seat's hand.
    pub card: CardId,

    /// Target cell.
    pub cell: CellIndex,
}

impl Move {
    #[must_use]
    pub const fn new(player: PlayerId, card: CardId, cell: CellIndex) -> Self {
        Self { player, card, cell }
    }
}

/// A completed move with metadata for history tracking.
///
/// Used for replay, debugging, and persisted match results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,

    /// The move itself.
    pub mv: Move,

    /// Cells whose owner flipped to `mv.player`.
    pub captured: Captures,
}

impl MoveRecord {
    #[must_use]
    pub fn new(turn: u32, mv: Move, captured: Captures) -> Self {
        Self { turn, mv, captured }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_move_equality() {
        let a = Move::new(PlayerId::ONE, CardId::new(1), CellIndex::CENTER);
        let b = Move::new(PlayerId::ONE, CardId::new(1), CellIndex::CENTER);
        let c = Move::new(PlayerId::TWO, CardId::new(1), CellIndex::CENTER);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_move_record_serialization() {
        let mv = Move::new(PlayerId::TWO, CardId::new(9), CellIndex::CENTER);
        let record = MoveRecord::new(2, mv, smallvec![CellIndex::TOP_LEFT]);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
