use crate::cell::Cell;
use core::fmt;
use grid_util::{Grid, Point, SimpleGrid};
use itertools::Itertools;
use log::debug;

/// An ordered sequence of cells from start to goal, both inclusive. An empty path means the goal
/// could not be reached; a path from a cell to itself is that single cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The "no path" value.
    pub fn empty() -> Path {
        Path { cells: Vec::new() }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
    pub fn into_vec(self) -> Vec<Cell> {
        self.cells
    }

    /// Number of cells, including start and goal.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Number of moves. Zero for both the empty path and a single-cell path.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Cell> {
        self.cells.first()
    }
    pub fn goal(&self) -> Option<&Cell> {
        self.cells.last()
    }

    /// Whether every consecutive pair of cells is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Path {
        Path { cells }
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            write!(f, "<no path>")
        } else {
            write!(f, "{}", self.cells.iter().join(" -> "))
        }
    }
}

/// Walks the predecessor links backwards from `goal` until `start` is met and returns the cells in
/// start to goal order.
///
/// If the goal was never assigned a predecessor (and is not the start itself) the result is the
/// empty path. The walk is bounded by the number of cells in the table, so a corrupted table with a
/// cycle also yields the empty path instead of looping.
pub fn reconstruct(predecessors: &SimpleGrid<Option<Cell>>, start: Cell, goal: Cell) -> Path {
    if !predecessors.point_in_bounds(start.into()) || !predecessors.point_in_bounds(goal.into()) {
        debug!("{} or {} lies outside the predecessor table", start, goal);
        return Path::empty();
    }
    let limit = predecessors.width() * predecessors.height();
    let mut cells: Vec<Cell> = std::iter::successors(Some(goal), |cell| {
        if *cell == start {
            None
        } else {
            predecessors.get_point(Point::from(*cell)).copied().flatten()
        }
    })
    .take(limit)
    .collect();
    if cells.last() != Some(&start) {
        debug!("No predecessor chain leads from {} back to {}", goal, start);
        return Path::empty();
    }
    cells.reverse();
    Path::from(cells)
}
