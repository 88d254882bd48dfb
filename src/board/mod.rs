//! Board system: cell addressing, placed cards, and the 3x3 grid.
//!
//! ## Key Types
//!
//! - `CellIndex`: Validated position `0..9`, row-major
//! - `Direction`: Card sides and grid steps
//! - `PlacedCard`: A card on the board plus its owner
//! - `Board`: The grid itself

pub mod cell;
pub mod grid;
pub mod placed;

pub use cell::{CellIndex, Direction, BOARD_SIDE, CELL_COUNT};
pub use grid::{Board, Neighbors};
pub use placed::PlacedCard;
