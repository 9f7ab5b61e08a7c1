use crate::cell::Cell;
use crate::error::{CellRole, PathError};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] stores the traversability of every cell in a [BoolGrid], where a blocked cell is
/// [true] and a free one [false], and maintains the 4-connected components of the free cells in a
/// [UnionFind] structure so that unreachable goals can be rejected without a search.
///
/// The grid is only mutated while it is being set up. Searches take it by shared reference, so
/// several threads may search the same grid at once.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a grid of the given size with every cell free and the components already generated.
    pub fn new(rows: usize, cols: usize) -> Result<PathingGrid, PathError> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(PathError::InvalidDimensions { rows, cols });
        }
        let mut pathing_grid = PathingGrid {
            grid: BoolGrid::new(cols, rows, false),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }
    pub fn cols(&self) -> usize {
        self.grid.width()
    }
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_within_bounds(&self, row: i32, col: i32) -> bool {
        self.grid.index_in_bounds(col, row)
    }
    pub fn contains(&self, cell: &Cell) -> bool {
        self.is_within_bounds(cell.row, cell.col)
    }

    /// Row-major index of an in-bounds cell, as used by the [UnionFind] components.
    pub(crate) fn get_ix(&self, cell: &Cell) -> usize {
        debug_assert!(self.contains(cell));
        self.grid.get_ix_point(&Point::from(*cell))
    }

    /// Whether the cell is a wall.
    ///
    /// # Panics
    /// If the cell lies outside the grid. Check [contains](Self::contains) first or use
    /// [blocked](Self::blocked).
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        assert!(
            self.contains(cell),
            "cell {} is outside the {}x{} grid",
            cell,
            self.rows(),
            self.cols()
        );
        self.grid.get(cell.col, cell.row)
    }

    /// Bounds-checked variant of [is_blocked](Self::is_blocked): [None] for cells outside the grid.
    pub fn blocked(&self, cell: &Cell) -> Option<bool> {
        if self.contains(cell) {
            Some(self.grid.get(cell.col, cell.row))
        } else {
            None
        }
    }

    /// Free and inside the grid.
    pub fn can_move_to(&self, cell: &Cell) -> bool {
        self.blocked(cell) == Some(false)
    }

    /// Fails with [PathError::InvalidCoordinate] if the cell is outside the grid.
    pub fn check_bounds(&self, cell: &Cell, role: CellRole) -> Result<(), PathError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(PathError::InvalidCoordinate {
                role,
                cell: *cell,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Checks the preconditions of a search: both endpoints inside the grid and free.
    pub fn check_endpoints(&self, start: &Cell, goal: &Cell) -> Result<(), PathError> {
        for (cell, role) in [(start, CellRole::Start), (goal, CellRole::Goal)] {
            self.check_bounds(cell, role)?;
            if self.is_blocked(cell) {
                return Err(PathError::BlockedEndpoint { role, cell: *cell });
            }
        }
        Ok(())
    }

    /// Marks a cell as a wall or frees it again. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, cell: &Cell, blocked: bool) -> Result<(), PathError> {
        self.check_bounds(cell, CellRole::Wall)?;
        let was_blocked = self.is_blocked(cell);
        self.grid.set(cell.col, cell.row, blocked);
        if blocked && !was_blocked {
            self.components_dirty = true;
        } else if !blocked {
            let ix = self.get_ix(cell);
            for n in self.neighborhood(cell) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    pub fn add_wall(&mut self, cell: &Cell) -> Result<(), PathError> {
        self.set_blocked(cell, true)
    }

    /// The free orthogonal neighbours of a cell, in [Direction::ALL](crate::Direction::ALL) order.
    pub fn neighborhood(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Cells outside the grid are
    /// unreachable. Only meaningful while the components are not dirty.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.contains(start) && self.contains(goal) {
            !self.components.equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let cell = Cell::new(row, col);
                if self.is_blocked(&cell) {
                    continue;
                }
                let parent_ix = self.get_ix(&cell);
                // Linking right and down is enough to cover every edge once.
                for n in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                    if self.can_move_to(&n) {
                        let ix = self.get_ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let glyph = if self.grid.get(col, row) { '#' } else { '.' };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
