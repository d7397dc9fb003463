//! Errors raised while building a [`Board`](crate::Board).

use thiserror::Error;

use crate::geom::Point;

/// Reasons a grid is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// No rows, or a first row with no cells.
    #[error("board is empty")]
    Empty,

    /// Rows have inconsistent widths.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// No `A` cell on the board.
    #[error("board has no agent start cell")]
    MissingAgent,

    /// More than one `A` cell on the board.
    #[error("board has more than one agent start cell: {first} and {second}")]
    MultipleAgents { first: Point, second: Point },

    /// The recorded agent start does not match the board cells.
    #[error("agent recorded at {recorded} but the board has it at {found}")]
    AgentMismatch { recorded: Point, found: Point },

    /// More rows or columns than a coordinate can address.
    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    /// A character outside the board alphabet (strict parsing only).
    #[error("unrecognized symbol {ch:?} at {pos}")]
    UnrecognizedSymbol { ch: char, pos: Point },
}
