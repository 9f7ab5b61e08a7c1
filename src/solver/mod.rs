use crate::cell::Cell;
use crate::error::PathError;
use crate::pathing_grid::PathingGrid;
use crate::reconstruct::Path;
use crate::search::{uniform_cost_search, SearchOutcome};
use crate::{N_SMALLVEC_SIZE, UNIT_COST};
use itertools::Itertools;
use log::{info, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Cell, i32)>;

    /// Estimate of the remaining cost from `p1` to `p2`. Must not overestimate.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32;

    /// Cost of a single move between two adjacent cells.
    fn cost(&self, _grid: &PathingGrid, _from: &Cell, _to: &Cell) -> i32 {
        UNIT_COST
    }

    fn successors(&self, grid: &PathingGrid, node: &Cell) -> Self::Successors;

    /// The free orthogonal neighbours of `node` paired with [cost](Self::cost).
    fn neighborhood_and_cost(
        &self,
        grid: &PathingGrid,
        node: &Cell,
    ) -> SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]> {
        grid.neighborhood(node)
            .into_iter()
            .map(|n| (n, self.cost(grid, node, &n)))
            .collect()
    }

    fn get_path_cost(&self, path: &Path, grid: &PathingGrid) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(grid, a, b))
            .sum()
    }

    /// Runs the search and returns its distance and predecessor tables.
    fn search(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome<i32>, PathError> {
        grid.check_endpoints(&start, &goal)?;
        Ok(run_search(self, grid, start, goal))
    }

    /// Computes a shortest path from start to goal. An unreachable goal gives the empty path;
    /// endpoints outside the grid or on a wall are an error.
    fn find_shortest_path(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<Path, PathError> {
        grid.check_endpoints(&start, &goal)?;
        // Check if start and goal are on the same connected component.
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(Path::empty());
        }
        let outcome = run_search(self, grid, start, goal);
        if !outcome.reached && !grid.components_dirty {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        Ok(outcome.path())
    }
}

/// The search proper, for endpoints that have already been checked.
fn run_search<S: GridSolver + ?Sized>(
    solver: &S,
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
) -> SearchOutcome<i32> {
    uniform_cost_search(
        grid,
        start,
        goal,
        |node| solver.successors(grid, node),
        |node| solver.heuristic(node, &goal),
    )
}

#[cfg(test)]
mod tests {
    use super::dijkstra::DijkstraSolver;
    use super::*;

    /// Moving into column 1 costs 10, everything else the unit cost.
    struct SwampSolver;

    impl GridSolver for SwampSolver {
        type Successors = SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]>;

        fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
            0
        }
        fn cost(&self, _grid: &PathingGrid, _from: &Cell, to: &Cell) -> i32 {
            if to.col == 1 {
                10
            } else {
                UNIT_COST
            }
        }
        fn successors(&self, grid: &PathingGrid, node: &Cell) -> Self::Successors {
            self.neighborhood_and_cost(grid, node)
        }
    }

    #[test]
    fn replacing_the_cost_changes_the_route() {
        // |S.G|
        // |...|
        // |...|
        let grid = PathingGrid::new(3, 3).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 2);
        let unit = DijkstraSolver.find_shortest_path(&grid, start, goal).unwrap();
        let swamp = SwampSolver.find_shortest_path(&grid, start, goal).unwrap();
        assert_eq!(unit.len(), 3);
        assert_eq!(DijkstraSolver.get_path_cost(&unit, &grid), 2);
        // Column 1 has to be crossed once whichever way is taken.
        assert_eq!(SwampSolver.get_path_cost(&swamp, &grid), 11);
        assert!(swamp.is_contiguous());
    }

    #[test]
    fn weighted_search_improves_recorded_distances() {
        // Stepping from column 0 into column 1 is expensive except on the bottom row.
        struct CorridorSolver;
        impl GridSolver for CorridorSolver {
            type Successors = SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]>;
            fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
                0
            }
            fn cost(&self, _grid: &PathingGrid, from: &Cell, to: &Cell) -> i32 {
                if from.col == 0 && to.col == 1 && to.row != 2 {
                    10
                } else {
                    UNIT_COST
                }
            }
            fn successors(&self, grid: &PathingGrid, node: &Cell) -> Self::Successors {
                self.neighborhood_and_cost(grid, node)
            }
        }
        let grid = PathingGrid::new(3, 3).unwrap();
        let outcome = CorridorSolver
            .search(&grid, Cell::new(0, 0), Cell::new(0, 2))
            .unwrap();
        assert!(outcome.reached);
        // Down to the corridor, across and back up.
        assert_eq!(outcome.goal_distance(), Some(6));
        let path = outcome.path();
        assert_eq!(path.len(), 7);
        assert_eq!(CorridorSolver.get_path_cost(&path, &grid), 6);
        // (1, 1) is first entered from the left at cost 11, later from below at cost 4.
        assert_eq!(outcome.distance(&Cell::new(1, 1)), Some(4));
        assert_eq!(outcome.predecessor(&Cell::new(1, 1)), Some(Cell::new(2, 1)));
    }

    #[test]
    fn invalid_endpoints_are_errors() {
        let mut grid = PathingGrid::new(3, 3).unwrap();
        grid.add_wall(&Cell::new(1, 1)).unwrap();
        grid.update();
        assert!(matches!(
            DijkstraSolver.find_shortest_path(&grid, Cell::new(-1, 0), Cell::new(2, 2)),
            Err(PathError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            DijkstraSolver.search(&grid, Cell::new(0, 0), Cell::new(1, 1)),
            Err(PathError::BlockedEndpoint { .. })
        ));
    }

    #[test]
    fn path_and_search_agree_on_every_endpoint_pair() {
        // |..#.|
        // |.##.|
        // |....|
        let mut grid = PathingGrid::new(3, 4).unwrap();
        for wall in [Cell::new(0, 2), Cell::new(1, 1), Cell::new(1, 2)] {
            grid.add_wall(&wall).unwrap();
        }
        grid.update();
        for row in -1..=3 {
            for col in -1..=4 {
                let start = Cell::new(0, 0);
                let goal = Cell::new(row, col);
                let path = DijkstraSolver.find_shortest_path(&grid, start, goal);
                let searched = DijkstraSolver
                    .search(&grid, start, goal)
                    .map(|outcome| outcome.path());
                assert_eq!(path, searched, "goal {}", goal);
                assert_eq!(path.is_err(), !grid.can_move_to(&goal));
            }
        }
    }

    #[test]
    fn dirty_components_fall_back_to_search() {
        // |S#G|
        let mut grid = PathingGrid::new(1, 3).unwrap();
        grid.add_wall(&Cell::new(0, 1)).unwrap();
        assert!(grid.components_dirty);
        let path = DijkstraSolver
            .find_shortest_path(&grid, Cell::new(0, 0), Cell::new(0, 2))
            .unwrap();
        assert!(path.is_empty());
    }
}
