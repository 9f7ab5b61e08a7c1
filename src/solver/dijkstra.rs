use smallvec::SmallVec;

use crate::{cell::Cell, pathing_grid::PathingGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// Uniform-cost search: expands cells strictly in order of their distance from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Cell) -> Self::Successors {
        self.neighborhood_and_cost(grid, node)
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = PathingGrid::new(1, 1).unwrap();
        let start = Cell::new(0, 0);
        let path = DijkstraSolver
            .find_shortest_path(&grid, start, start)
            .unwrap();
        assert_eq!(path.cells(), &[start]);
    }

    /// Right is tried before down, so the route hugs the top edge first.
    #[test]
    fn ties_prefer_the_first_direction() {
        let grid = PathingGrid::new(3, 3).unwrap();
        let path = DijkstraSolver
            .find_shortest_path(&grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(
            path.cells(),
            &[
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ]
        );
    }

    #[test]
    fn routes_around_a_wall() {
        // |S..|
        // |.#.|
        // |..G|
        let mut grid = PathingGrid::new(3, 3).unwrap();
        grid.add_wall(&Cell::new(1, 1)).unwrap();
        grid.update();
        let path = DijkstraSolver
            .find_shortest_path(&grid, Cell::new(2, 2), Cell::new(0, 0))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|c| !grid.is_blocked(c)));
        assert_eq!(path.start(), Some(&Cell::new(2, 2)));
        assert_eq!(path.goal(), Some(&Cell::new(0, 0)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        // |S....|
        // |..#..|
        // |.#G#.|
        // |..#..|
        let mut grid = PathingGrid::new(4, 5).unwrap();
        for wall in [
            Cell::new(1, 2),
            Cell::new(2, 1),
            Cell::new(2, 3),
            Cell::new(3, 2),
        ] {
            grid.add_wall(&wall).unwrap();
        }
        let start = Cell::new(0, 0);
        let goal = Cell::new(2, 2);
        // Without components the frontier is drained.
        let outcome = DijkstraSolver.search(&grid, start, goal).unwrap();
        assert!(!outcome.reached);
        assert_eq!(outcome.expanded, 4 * 5 - 5);
        assert!(outcome.path().is_empty());
        grid.update();
        assert!(DijkstraSolver
            .find_shortest_path(&grid, start, goal)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn blocked_start_is_rejected() {
        let mut grid = PathingGrid::new(2, 2).unwrap();
        grid.add_wall(&Cell::new(0, 0)).unwrap();
        assert_eq!(
            DijkstraSolver.find_shortest_path(&grid, Cell::new(0, 0), Cell::new(1, 1)),
            Err(PathError::BlockedEndpoint {
                role: crate::error::CellRole::Start,
                cell: Cell::new(0, 0)
            })
        );
    }
}
