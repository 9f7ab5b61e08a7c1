use smallvec::SmallVec;

use crate::{cell::Cell, pathing_grid::PathingGrid, solver::GridSolver, N_SMALLVEC_SIZE, UNIT_COST};

/// A* with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
/// heuristic. Finds paths of the same length as [DijkstraSolver](super::dijkstra::DijkstraSolver)
/// while usually expanding fewer cells. A `heuristic_factor` above 1.0 trades optimality for speed.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Cell) -> Self::Successors {
        self.neighborhood_and_cost(grid, node)
    }

    /// Just the unit cost times the Manhattan distance times a heuristic factor.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        (p1.manhattan_distance(p2) as f32 * UNIT_COST as f32 * self.heuristic_factor) as i32
    }
}
