//! # grid_dijkstra
//!
//! Shortest obstacle-avoiding paths on a 4-connected grid. Every cell is either free or a wall
//! and every move costs the same, so the search is
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) with unit edge
//! weights. The edge cost is kept as a separate step of the [GridSolver] trait so that weighted
//! variants only need to override [GridSolver::cost].
//!
//! The [PathingGrid] pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) so that a goal
//! which cannot be reached is rejected without flood-filling the grid.
//!
//! ```
//! use grid_dijkstra::{find_shortest_path, Cell, PathingGrid};
//!
//! let mut grid = PathingGrid::new(3, 3).unwrap();
//! grid.add_wall(&Cell::new(1, 1)).unwrap();
//! grid.update();
//! let path = find_shortest_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod cell;
pub mod error;
pub mod pathing_grid;
pub mod reconstruct;
pub mod scenario;
pub mod search;
pub mod solver;

pub use cell::{Cell, Direction};
pub use error::{CellRole, PathError};
pub use pathing_grid::PathingGrid;
pub use reconstruct::{reconstruct, Path};
pub use scenario::{Scenario, ScenarioBuilder};
pub use search::SearchOutcome;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Cost of moving to an orthogonal neighbour.
pub const UNIT_COST: i32 = 1;
/// Inline capacity for neighbourhoods; a cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
/// Rows of the reference 20x40 board.
pub const DEFAULT_ROWS: usize = 20;
/// Columns of the reference 20x40 board.
pub const DEFAULT_COLS: usize = 40;

/// Computes a shortest path with [DijkstraSolver]. Returns the empty path if the goal cannot be
/// reached and `[start]` if start and goal coincide.
pub fn find_shortest_path(grid: &PathingGrid, start: Cell, goal: Cell) -> Result<Path, PathError> {
    DijkstraSolver.find_shortest_path(grid, start, goal)
}
