//! Error type shared by every fallible arena operation.

use std::error::Error;
use std::fmt;

use crate::arena::arena_types::{Square, UnitId};

/// Convenience alias used by the arena's fallible operations.
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Why an arena operation was refused. Each variant names the operation
/// argument that broke the contract; the arena is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    /// The id was never issued by this arena. `0` is never issued.
    InvalidUnitId(UnitId),
    /// The square lies outside the board grid.
    OutOfBounds(Square),
    /// The unit exists in the registry but occupies no square, either
    /// because it was captured or because it was recruited off the board.
    NotOnBoard(UnitId),
    /// The destination is not among the unit's current valid moves.
    IllegalDestination(UnitId, Square),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::InvalidUnitId(unit_id) => {
                write!(f, "unit id {unit_id} was never issued")
            }
            ArenaError::OutOfBounds(square) => {
                write!(f, "square ({}, {}) is outside the board", square.x, square.y)
            }
            ArenaError::NotOnBoard(unit_id) => {
                write!(f, "unit {unit_id} is not on the board")
            }
            ArenaError::IllegalDestination(unit_id, square) => {
                write!(
                    f,
                    "unit {unit_id} may not move to ({}, {})",
                    square.x, square.y
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::ArenaError;
    use crate::arena::arena_types::Square;

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            ArenaError::InvalidUnitId(9).to_string(),
            "unit id 9 was never issued"
        );
        assert_eq!(
            ArenaError::OutOfBounds(Square::new(8, -1)).to_string(),
            "square (8, -1) is outside the board"
        );
        assert_eq!(
            ArenaError::NotOnBoard(3).to_string(),
            "unit 3 is not on the board"
        );
        assert_eq!(
            ArenaError::IllegalDestination(2, Square::new(4, 4)).to_string(),
            "unit 2 may not move to (4, 4)"
        );
    }
}
