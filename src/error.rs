use thiserror::Error;

/// Errors raised while building, carving, or querying a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    #[error("Invalid maze dimensions {rows}x{cols}: rows and cols must both be at least 1")]
    InvalidDimension { rows: u16, cols: u16 },
    /// A coordinate query fell outside the grid.
    #[error("Cell ({row}, {col}) is out of bounds for a {rows}x{cols} maze")]
    OutOfBounds {
        row: u16,
        col: u16,
        rows: u16,
        cols: u16,
    },
    /// The grid has already been carved once.
    #[error("Maze has already been generated")]
    AlreadyGenerated,
    /// The carver ran out of candidates and backtrack history with cells left
    /// to visit. Only reachable if the grid topology is disconnected.
    #[error(
        "Carver stalled at cell {cursor:?} with {unvisited} unvisited cells and an empty backtrack stack"
    )]
    InvariantViolation { cursor: (u16, u16), unvisited: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
