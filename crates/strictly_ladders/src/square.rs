//! Board positions and the serpentine grid geometry.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares along one side of the board.
pub const GRID_SIDE: u8 = 10;

/// A position on the board.
///
/// Squares 1-100 are board cells. Square 0 is the start: the player has
/// not entered the board yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Off-board starting square.
    pub const START: Square = Square(0);

    /// The winning square.
    pub const FINISH: Square = Square(100);

    /// Creates a square, returning `None` past the finish.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::FINISH.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the square (0-100).
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns true for the off-board start.
    pub const fn is_start(self) -> bool {
        self.0 == Self::START.0
    }

    /// Returns true for square 100.
    pub const fn is_finish(self) -> bool {
        self.0 == Self::FINISH.0
    }

    /// Advances by `steps`, or `None` if that would pass the finish.
    pub fn checked_advance(self, steps: u8) -> Option<Self> {
        self.0.checked_add(steps).and_then(Self::new)
    }

    /// Iterates every on-board square, 1 through 100.
    pub fn all_cells() -> impl DoubleEndedIterator<Item = Square> {
        (1..=Self::FINISH.0).map(Square)
    }

    /// Grid cell occupied by this square, `None` for the start square.
    #[instrument(level = "trace")]
    pub fn grid_coord(self) -> Option<GridCoord> {
        if self.is_start() {
            return None;
        }
        let offset = self.0 - 1;
        let row = offset / GRID_SIDE;
        let along = offset % GRID_SIDE;
        let col = if row % 2 == 0 {
            along
        } else {
            GRID_SIDE - 1 - along
        };
        Some(GridCoord { row, col })
    }

    /// Square shown at a grid cell.
    ///
    /// Even rows run left to right, odd rows right to left, so square 1 sits
    /// bottom-left and the numbering snakes upward to 100 at top-left.
    #[instrument(level = "trace")]
    pub fn from_grid(coord: GridCoord) -> Square {
        let GridCoord { row, col } = coord;
        if row % 2 == 0 {
            Square(GRID_SIDE * row + col + 1)
        } else {
            Square(GRID_SIDE * row + (GRID_SIDE - col))
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::new(value).ok_or_else(|| format!("square {} is past the finish", value))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell of the 10x10 board, row 0 at the bottom and column 0 at the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row counted from the bottom (0-9).
    pub row: u8,
    /// Column counted from the left (0-9).
    pub col: u8,
}

impl GridCoord {
    /// Creates a coordinate, `None` outside the 10x10 grid.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < GRID_SIDE && col < GRID_SIDE).then_some(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_past_finish() {
        assert_eq!(Square::new(100), Some(Square::FINISH));
        assert_eq!(Square::new(101), None);
    }

    #[test]
    fn test_checked_advance() {
        let sq = Square::new(94).unwrap();
        assert_eq!(sq.checked_advance(6), Some(Square::FINISH));
        assert_eq!(Square::new(95).unwrap().checked_advance(6), None);
        assert_eq!(Square::FINISH.checked_advance(u8::MAX), None);
    }

    #[test]
    fn test_serpentine_corners() {
        let at = |row, col| Square::from_grid(GridCoord::new(row, col).unwrap()).value();
        assert_eq!(at(0, 0), 1);
        assert_eq!(at(0, 9), 10);
        assert_eq!(at(1, 9), 11);
        assert_eq!(at(1, 0), 20);
        assert_eq!(at(2, 0), 21);
        assert_eq!(at(9, 0), 100);
        assert_eq!(at(9, 9), 91);
    }

    #[test]
    fn test_grid_round_trip_covers_board() {
        for square in Square::all_cells() {
            let coord = square.grid_coord().expect("on-board square has a cell");
            assert_eq!(Square::from_grid(coord), square);
        }
        assert_eq!(Square::START.grid_coord(), None);
    }

    #[test]
    fn test_grid_coord_out_of_range() {
        assert!(GridCoord::new(10, 0).is_none());
        assert!(GridCoord::new(0, 10).is_none());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Square>("101").is_err());
        assert_eq!(serde_json::from_str::<Square>("38").unwrap().value(), 38);
    }
}
