//! Cell addressing on the 3x3 grid.
//!
//! Cells are numbered row-major:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Width and height of the board.
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A side of a card, or a step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Clockwise from the top.
    pub const ALL: [Direction; 4] = [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

    /// The side that faces this one across a shared edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// A validated board position in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    pub const TOP_LEFT: CellIndex = CellIndex(0);
    pub const CENTER: CellIndex = CellIndex(4);
    pub const BOTTOM_RIGHT: CellIndex = CellIndex(8);

    /// Validate a raw index.
    ///
    /// ```
    /// use tessera::board::CellIndex;
    ///
    /// assert_eq!(CellIndex::new(4).unwrap(), CellIndex::CENTER);
    /// assert!(CellIndex::new(9).is_err());
    /// ```
    pub fn new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(GameError::OutOfRange { index })
        }
    }

    /// Build from grid coordinates, if they are on the board.
    #[must_use]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIDE && col < BOARD_SIDE).then(|| Self((row * BOARD_SIDE + col) as u8))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIDE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIDE
    }

    /// The adjacent cell in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (row, col) = (self.row(), self.col());
        match direction {
            Direction::Top => row.checked_sub(1).and_then(|r| Self::from_row_col(r, col)),
            Direction::Right => Self::from_row_col(row, col + 1),
            Direction::Bottom => Self::from_row_col(row + 1, col),
            Direction::Left => col.checked_sub(1).and_then(|c| Self::from_row_col(row, c)),
        }
    }

    /// Iterate over every cell in index order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_row_col() {
        assert_eq!((cell(0).row(), cell(0).col()), (0, 0));
        assert_eq!((cell(5).row(), cell(5).col()), (1, 2));
        assert_eq!((cell(7).row(), cell(7).col()), (2, 1));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(CellIndex::new(9), Err(GameError::OutOfRange { index: 9 }));
        assert_eq!(CellIndex::try_from(100usize), Err(GameError::OutOfRange { index: 100 }));
    }

    #[test]
    fn test_deserialize_rejects_off_board_cell() {
        assert_eq!(serde_json::from_str::<CellIndex>("8").unwrap(), CellIndex::BOTTOM_RIGHT);
        let err = serde_json::from_str::<CellIndex>("200").unwrap_err();
        assert!(err.to_string().contains("outside the 3x3 board"));
    }

    #[test]
    fn test_corner_neighbors() {
        assert_eq!(cell(0).neighbor(Direction::Top), None);
        assert_eq!(cell(0).neighbor(Direction::Left), None);
        assert_eq!(cell(0).neighbor(Direction::Right), Some(cell(1)));
        assert_eq!(cell(0).neighbor(Direction::Bottom), Some(cell(3)));

        assert_eq!(cell(8).neighbor(Direction::Right), None);
        assert_eq!(cell(8).neighbor(Direction::Bottom), None);
    }

    #[test]
    fn test_edge_does_not_wrap() {
        assert_eq!(cell(2).neighbor(Direction::Right), None);
        assert_eq!(cell(3).neighbor(Direction::Left), None);
    }

    #[test]
    fn test_center_has_four_neighbors() {
        let found: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|&d| CellIndex::CENTER.neighbor(d))
            .collect();
        assert_eq!(found, vec![cell(1), cell(5), cell(7), cell(3)]);
    }

    #[test]
    fn test_neighbor_symmetry() {
        for c in CellIndex::all() {
            for d in Direction::ALL {
                if let Some(n) = c.neighbor(d) {
                    assert_eq!(n.neighbor(d.opposite()), Some(c));
                }
            }
        }
    }
}
