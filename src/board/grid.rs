//! The 3x3 board.
//!
//! Cells are either empty or hold a `PlacedCard`. A cell is filled only
//! by `place`, and once filled it stays filled for the rest of the
//! session; captures change the owner in place.

use serde::{Deserialize, Serialize};

use super::cell::{CellIndex, Direction, CELL_COUNT};
use super::placed::PlacedCard;
use crate::core::{GameError, PlayerId, Result};

/// Adjacent cells of a position, in `Direction::ALL` order.
pub type Neighbors = [(Direction, Option<CellIndex>); 4];

/// The board.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use tessera::board::{Board, PlacedCard};
/// use tessera::cards::{Card, CardId, Powers};
/// use tessera::core::{GameError, PlayerId};
///
/// let card = Arc::new(Card::new(CardId::new(1), "Knight", Powers::new(6, 6, 6, 6)));
/// let mut board = Board::new();
///
/// board.place(4, PlacedCard::new(Arc::clone(&card), PlayerId::ONE)).unwrap();
/// assert_eq!(board.cell_at(4).unwrap().unwrap().owner, PlayerId::ONE);
///
/// let err = board.place(4, PlacedCard::new(card, PlayerId::TWO)).unwrap_err();
/// assert_eq!(err, GameError::CellOccupied { index: 4 });
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<PlacedCard>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell by raw index.
    ///
    /// Fails with `OutOfRange` if `index` is not in `0..9`.
    pub fn cell_at(&self, index: usize) -> Result<Option<&PlacedCard>> {
        Ok(self.get(CellIndex::new(index)?))
    }

    /// Look up a validated cell.
    #[must_use]
    pub fn get(&self, cell: CellIndex) -> Option<&PlacedCard> {
        self.cells[cell.index()].as_ref()
    }

    #[must_use]
    pub fn is_occupied(&self, cell: CellIndex) -> bool {
        self.cells[cell.index()].is_some()
    }

    /// Place a card at a raw index.
    ///
    /// Succeeds only if the cell is empty; on error the board is unchanged.
    pub fn place(&mut self, index: usize, placed: PlacedCard) -> Result<CellIndex> {
        let cell = CellIndex::new(index)?;
        self.place_at(cell, placed)?;
        Ok(cell)
    }

    /// Place a card at a validated cell.
    pub fn place_at(&mut self, cell: CellIndex, placed: PlacedCard) -> Result<()> {
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return Err(GameError::CellOccupied { index: cell.index() });
        }
        *slot = Some(placed);
        Ok(())
    }

    /// The up-to-4 adjacent cells of a raw index, `None` past the edge.
    pub fn neighbors(&self, index: usize) -> Result<Neighbors> {
        Ok(Self::neighbors_of(CellIndex::new(index)?))
    }

    /// Adjacent cells of a validated cell.
    #[must_use]
    pub fn neighbors_of(cell: CellIndex) -> Neighbors {
        Direction::ALL.map(|d| (d, cell.neighbor(d)))
    }

    /// Flip the owner of an occupied cell. Captures only.
    pub(crate) fn set_owner(&mut self, cell: CellIndex, owner: PlayerId) {
        if let Some(placed) = self.cells[cell.index()].as_mut() {
            placed.owner = owner;
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Number of cells currently owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count()
    }

    /// Empty cells in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(move |&c| !self.is_occupied(c))
    }

    /// Occupied cells in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (CellIndex, &PlacedCard)> {
        CellIndex::all().zip(self.cells.iter()).filter_map(|(c, p)| p.as_ref().map(|p| (c, p)))
    }
}

impl std::fmt::Display for Board {
    /// Three rows of `.` (empty), `1`, or `2` (owner seat).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let mark = match cell {
                None => '.',
                Some(p) if p.owner == PlayerId::ONE => '1',
                Some(_) => '2',
            };
            write!(f, "{mark}")?;
            if i % 3 == 2 && i + 1 < CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Powers};
    use std::sync::Arc;

    fn placed(id: u32, owner: PlayerId) -> PlacedCard {
        PlacedCard::new(
            Arc::new(Card::new(CardId::new(id), "c", Powers::new(5, 5, 5, 5))),
            owner,
        )
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.empty_cells().count(), 9);
        for i in 0..9 {
            assert!(board.cell_at(i).unwrap().is_none());
        }
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(9).unwrap_err(), GameError::OutOfRange { index: 9 });
    }

    #[test]
    fn test_place_out_of_range_leaves_board_unchanged() {
        let mut board = Board::new();
        let err = board.place(12, placed(1, PlayerId::ONE)).unwrap_err();
        assert_eq!(err, GameError::OutOfRange { index: 12 });
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, placed(1, PlayerId::ONE)).unwrap();
        let before = board.clone();

        let err = board.place(0, placed(2, PlayerId::TWO)).unwrap_err();

        assert_eq!(err, GameError::CellOccupied { index: 0 });
        assert_eq!(board, before);
        assert_eq!(board.cell_at(0).unwrap().unwrap().card_id(), CardId::new(1));
    }

    #[test]
    fn test_neighbors() {
        let board = Board::new();
        let n = board.neighbors(0).unwrap();
        assert_eq!(n[0], (Direction::Top, None));
        assert_eq!(n[1], (Direction::Right, CellIndex::new(1).ok()));
        assert_eq!(n[2], (Direction::Bottom, CellIndex::new(3).ok()));
        assert_eq!(n[3], (Direction::Left, None));

        assert!(board.neighbors(9).is_err());
    }

    #[test]
    fn test_counts_and_full() {
        let mut board = Board::new();
        for i in 0..9 {
            let owner = if i % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
            board.place(i, placed(i as u32, owner)).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.count_owned(PlayerId::ONE), 5);
        assert_eq!(board.count_owned(PlayerId::TWO), 4);
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_set_owner() {
        let mut board = Board::new();
        let cell = board.place(3, placed(1, PlayerId::ONE)).unwrap();
        board.set_owner(cell, PlayerId::TWO);
        assert_eq!(board.get(cell).unwrap().owner, PlayerId::TWO);

        // Empty cells stay empty.
        board.set_owner(CellIndex::CENTER, PlayerId::TWO);
        assert!(!board.is_occupied(CellIndex::CENTER));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, placed(1, PlayerId::ONE)).unwrap();
        board.place(4, placed(2, PlayerId::TWO)).unwrap();
        assert_eq!(board.to_string(), "1..\n.2.\n...");
    }
}
