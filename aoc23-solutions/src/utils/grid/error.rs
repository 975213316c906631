//! Error type for grid construction and access

use thiserror::Error;

use super::Coord;

/// Errors raised by [`Grid`](super::Grid) and the coordinate helpers.
///
/// All of these point at a caller or input mistake; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a row without cells
    #[error("grid must have at least one row and one column")]
    Empty,
    /// Rows of different length
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Read or write outside the grid
    #[error("{coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    /// A query that requires a coordinate inside the grid got one outside it
    #[error("grid does not contain {0}")]
    NotContained(Coord),
    /// Two coordinates were expected to be one cardinal step apart
    #[error("{from} and {to} are not cardinally adjacent")]
    NotAdjacent { from: Coord, to: Coord },
    /// Row or column insertion past the end
    #[error("cannot insert at offset {offset}, limit is {limit}")]
    OffsetOutOfRange { offset: usize, limit: usize },
}
