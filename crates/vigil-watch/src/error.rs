use thiserror::Error;
use vigil_core::{BoardError, Point};

/// Errors returned when solving from raw rows or text.
///
/// A solve that fails never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The grid is empty, ragged, too large, or does not have exactly one
    /// agent.
    #[error("invalid grid: {0}")]
    InvalidGrid(BoardError),

    /// A symbol outside the board alphabet under strict parsing.
    #[error("unrecognized symbol {ch:?} at {pos}")]
    UnrecognizedSymbol { ch: char, pos: Point },
}

impl From<BoardError> for SolveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::UnrecognizedSymbol { ch, pos } => Self::UnrecognizedSymbol { ch, pos },
            other => Self::InvalidGrid(other),
        }
    }
}
