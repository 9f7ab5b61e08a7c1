use crate::cell::Cell;
use crate::error::{CellRole, PathError};
use crate::pathing_grid::PathingGrid;
use crate::reconstruct::Path;
use crate::solver::GridSolver;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::info;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A grid together with the start and goal of a search. Only obtainable through
/// [ScenarioBuilder::build], which guarantees that both endpoints are inside the grid, free, and
/// that no wall was requested on top of either of them.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: PathingGrid,
    pub start: Cell,
    pub goal: Cell,
}

impl Scenario {
    pub fn builder(rows: usize, cols: usize) -> ScenarioBuilder {
        ScenarioBuilder::new(rows, cols)
    }

    pub fn solve<S: GridSolver>(&self, solver: &S) -> Result<Path, PathError> {
        solver.find_shortest_path(&self.grid, self.start, self.goal)
    }
}

/// Collects the endpoints and walls of a [Scenario]. Walls are kept in insertion order and
/// duplicates are ignored.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    rows: usize,
    cols: usize,
    start: Option<Cell>,
    goal: Option<Cell>,
    walls: FxIndexSet<Cell>,
}

impl Default for ScenarioBuilder {
    fn default() -> ScenarioBuilder {
        ScenarioBuilder::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl ScenarioBuilder {
    pub fn new(rows: usize, cols: usize) -> ScenarioBuilder {
        ScenarioBuilder {
            rows,
            cols,
            start: None,
            goal: None,
            walls: FxIndexSet::default(),
        }
    }

    pub fn start(mut self, cell: Cell) -> ScenarioBuilder {
        self.start = Some(cell);
        self
    }

    pub fn goal(mut self, cell: Cell) -> ScenarioBuilder {
        self.goal = Some(cell);
        self
    }

    pub fn wall(mut self, cell: Cell) -> ScenarioBuilder {
        self.walls.insert(cell);
        self
    }

    pub fn walls<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> ScenarioBuilder {
        self.walls.extend(cells);
        self
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Validates the input and builds the grid with its components generated.
    pub fn build(self) -> Result<Scenario, PathError> {
        let mut grid = PathingGrid::new(self.rows, self.cols)?;
        let start = self.start.ok_or(PathError::MissingEndpoint(CellRole::Start))?;
        let goal = self.goal.ok_or(PathError::MissingEndpoint(CellRole::Goal))?;
        grid.check_bounds(&start, CellRole::Start)?;
        grid.check_bounds(&goal, CellRole::Goal)?;
        for wall in &self.walls {
            if *wall == start {
                return Err(PathError::WallOnEndpoint {
                    role: CellRole::Start,
                    cell: *wall,
                });
            }
            if *wall == goal {
                return Err(PathError::WallOnEndpoint {
                    role: CellRole::Goal,
                    cell: *wall,
                });
            }
            grid.add_wall(wall)?;
        }
        grid.update();
        info!(
            "Built {}x{} grid with {} walls, start {}, goal {}",
            self.rows,
            self.cols,
            self.walls.len(),
            start,
            goal
        );
        Ok(Scenario { grid, start, goal })
    }
}
