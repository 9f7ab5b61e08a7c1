use core::fmt;
use grid_util::point::Point;

/// A grid coordinate addressed as (row, column). Rows grow downwards, columns to the right.
/// Coordinates are signed so that out-of-bounds requests such as row `-1` can be represented and
/// rejected instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in the given direction. May lie outside any grid.
    pub fn step(&self, dir: Direction) -> Cell {
        let (d_row, d_col) = dir.offset();
        Cell::new(self.row + d_row, self.col + d_col)
    }

    /// The four orthogonal neighbours in [Direction::ALL] order.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    /// Saturates at [u32::MAX] for cells at opposite ends of the coordinate range.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// grid_util addresses grids by (x, y), which is (column, row) here.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

/// Orthogonal move directions. The order of [Direction::ALL] is the order in which neighbours are
/// relaxed during a search and therefore decides which predecessor wins a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// (row, column) delta of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}
