use crate::cell::Cell;
use core::fmt;
use thiserror::Error;

/// What a coordinate was supplied as. Used to make errors point at the offending input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRole {
    Start,
    Goal,
    Wall,
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellRole::Start => write!(f, "start"),
            CellRole::Goal => write!(f, "goal"),
            CellRole::Wall => write!(f, "wall"),
        }
    }
}

/// Input that a search refuses to run on. An unreachable goal is not an error; it is reported as
/// an empty [Path](crate::Path).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("{role} cell {cell} lies outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        role: CellRole,
        cell: Cell,
        rows: usize,
        cols: usize,
    },
    #[error("{role} cell {cell} is blocked by a wall")]
    BlockedEndpoint { role: CellRole, cell: Cell },
    #[error("wall at {cell} overlaps the {role} cell")]
    WallOnEndpoint { role: CellRole, cell: Cell },
    #[error("no {0} cell was given")]
    MissingEndpoint(CellRole),
}
