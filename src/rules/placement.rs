//! Placement and capture resolution.
//!
//! After a card lands on a cell, each occupied neighbor that belongs to
//! the opponent is challenged: the placed card's power on the shared side
//! against the neighbor's power on the opposite side. A strictly higher
//! attack flips the neighbor to the placing seat; ties keep the defender.
//!
//! All challenges from one placement are decided against the board as it
//! was before any of them flipped, so captures never chain within a move.

use log::trace;
use smallvec::SmallVec;

use crate::board::{Board, CellIndex, PlacedCard};
use crate::core::Result;

/// Cells captured by a single placement (at most one per side).
pub type Captures = SmallVec<[CellIndex; 4]>;

/// The placement rule engine.
///
/// Stateless; every method is a pure transformation of the board it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlacementRules;

impl PlacementRules {
    /// Place `placed` at `cell` and resolve captures.
    ///
    /// Fails only with the board's own errors, in which case nothing
    /// changed. Once the card is down, capture resolution cannot fail.
    pub fn apply(board: &mut Board, cell: CellIndex, placed: PlacedCard) -> Result<Captures> {
        let owner = placed.owner;
        board.place_at(cell, placed)?;
        let captured = Self::resolve_captures(board, cell);
        for &target in &captured {
            board.set_owner(target, owner);
        }
        Ok(captured)
    }

    /// Decide which neighbors of `cell` the card there captures.
    ///
    /// Read-only: returns the cells to flip without flipping them, which is
    /// what makes the comparisons independent of each other.
    #[must_use]
    pub fn resolve_captures(board: &Board, cell: CellIndex) -> Captures {
        let mut captured = Captures::new();
        let Some(attacker) = board.get(cell) else {
            return captured;
        };

        for (side, neighbor) in Board::neighbors_of(cell) {
            let Some(target) = neighbor else { continue };
            let Some(defender) = board.get(target) else { continue };
            if defender.owner == attacker.owner {
                continue;
            }

            let attack = attacker.power(side);
            let defense = defender.power(side.opposite());
            trace!("cell {cell} {side} {attack} vs cell {target} {defense}");
            if attack > defense {
                captured.push(target);
            }
        }
        captured
    }
}
