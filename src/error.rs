use core::fmt;

use crate::cell::Role;

/// Which requirement for starting a search was not satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    MissingStart,
    MissingEnd,
    StartIsEnd,
    AdjacencyNotComputed,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Precondition::MissingStart => write!(f, "no start cell has been placed"),
            Precondition::MissingEnd => write!(f, "no end cell has been placed"),
            Precondition::StartIsEnd => write!(f, "start and end are the same cell"),
            Precondition::AdjacencyNotComputed => {
                write!(f, "grid adjacency has not been computed")
            }
        }
    }
}

/// Refusals produced by the grid, the search engine and the controller.
///
/// Only [PathfinderError::InvalidDimensions] is fatal, since no grid exists
/// afterwards. All other variants leave the state untouched and the next event
/// can be processed normally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathfinderError {
    InvalidDimensions { columns: i32, rows: i32 },
    OutOfBounds { x: i32, y: i32 },
    RoleConflict { x: i32, y: i32, role: Role },
    PreconditionNotMet(Precondition),
}

impl fmt::Display for PathfinderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathfinderError::InvalidDimensions { columns, rows } => write!(
                f,
                "invalid grid dimensions {columns}x{rows}: both must be positive"
            ),
            PathfinderError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) lies outside the grid")
            }
            PathfinderError::RoleConflict { x, y, role } => {
                write!(f, "cannot make wall cell ({x}, {y}) the {role} cell")
            }
            PathfinderError::PreconditionNotMet(reason) => {
                write!(f, "cannot start search: {reason}")
            }
        }
    }
}

impl std::error::Error for PathfinderError {}

impl From<Precondition> for PathfinderError {
    fn from(reason: Precondition) -> Self {
        PathfinderError::PreconditionNotMet(reason)
    }
}

pub type Result<T> = std::result::Result<T, PathfinderError>;
