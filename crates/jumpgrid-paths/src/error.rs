use jumpgrid_core::Coord;
use thiserror::Error;

/// Result alias for path queries.
pub type Result<T> = std::result::Result<T, PathError>;

/// Failure reasons for a path query.
///
/// Precondition violations ([`PathError::BlockedStart`],
/// [`PathError::BlockedGoal`]) are distinct from the ordinary
/// [`PathError::NoPath`] outcome, so callers can tell caller error apart
/// from a legitimately unreachable goal. The last two variants indicate
/// broken internal invariants and should never surface from a correct
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The start cell is out of bounds or blocked.
    #[error("start {0} is out of bounds or blocked")]
    BlockedStart(Coord),

    /// The goal cell is out of bounds or blocked.
    #[error("goal {0} is out of bounds or blocked")]
    BlockedGoal(Coord),

    /// The open queue was exhausted without reaching the goal.
    #[error("no path from {start} to {goal}")]
    NoPath { start: Coord, goal: Coord },

    /// Reconstruction exceeded the grid cell count, which would mean a
    /// cycle in the predecessor table.
    #[error("reconstructed path exceeds {max} cells")]
    PathOverflow { max: usize },

    /// The predecessor chain ended before reaching the start.
    #[error("predecessor chain broken at {0}")]
    BrokenChain(Coord),
}
