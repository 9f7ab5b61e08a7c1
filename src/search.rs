//! Priority-driven frontier expansion over a [PathingGrid]. The successor and heuristic functions
//! are supplied by the caller, which keeps the edge weights and the expansion order replaceable:
//! with a zero heuristic this is Dijkstra's algorithm, with an admissible one it is A*.
use crate::cell::Cell;
use crate::pathing_grid::PathingGrid;
use crate::reconstruct::{reconstruct, Path};
use grid_util::{Grid, Point, SimpleGrid};
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    cell: Cell,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest estimated cost first, then the deepest entry, then the
        // entry that was pushed first so equal keys always expand in the same order.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Per-search state. Allocated fresh for every search and consumed into a [SearchOutcome].
pub(crate) struct SearchContext<C> {
    distances: SimpleGrid<Option<C>>,
    predecessors: SimpleGrid<Option<Cell>>,
    frontier: BinaryHeap<SmallestCostHolder<C>>,
    sequence: usize,
}

impl<C: Zero + Ord + Copy> SearchContext<C> {
    pub(crate) fn new(grid: &PathingGrid, start: Cell) -> SearchContext<C> {
        let mut ct = SearchContext {
            distances: SimpleGrid::new(grid.cols(), grid.rows(), None),
            predecessors: SimpleGrid::new(grid.cols(), grid.rows(), None),
            frontier: BinaryHeap::new(),
            sequence: 0,
        };
        if let Some(d) = ct.distances.get_point_mut(start.into()) {
            *d = Some(C::zero());
            ct.push(C::zero(), C::zero(), start);
        }
        ct
    }

    fn push(&mut self, estimated_cost: C, cost: C, cell: Cell) {
        self.frontier.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.sequence,
            cell,
        });
        self.sequence += 1;
    }

    /// The best known cost of a cell, [None] standing in for infinity.
    pub(crate) fn distance(&self, cell: &Cell) -> Option<C> {
        self.distances.get_point(Point::from(*cell)).copied().flatten()
    }

    /// Records `candidate` as the distance of `cell`, reached from `from`, if it improves on the
    /// known distance. Recorded distances therefore only ever decrease.
    pub(crate) fn relax(&mut self, cell: &Cell, candidate: C, from: &Cell) -> bool {
        match self.distances.get_point_mut(Point::from(*cell)) {
            Some(d) => match *d {
                Some(known) if candidate >= known => return false,
                _ => *d = Some(candidate),
            },
            None => return false,
        }
        if let Some(p) = self.predecessors.get_point_mut(Point::from(*cell)) {
            *p = Some(*from);
        }
        true
    }
}

/// The tables a search leaves behind, together with some statistics about the run.
#[derive(Clone, Debug)]
pub struct SearchOutcome<C> {
    pub start: Cell,
    pub goal: Cell,
    /// Best known cost per cell, indexed by [Point] (x = column, y = row).
    pub distances: SimpleGrid<Option<C>>,
    pub predecessors: SimpleGrid<Option<Cell>>,
    /// Whether the goal was popped from the frontier.
    pub reached: bool,
    /// Number of cells whose successors were generated.
    pub expanded: usize,
    /// Number of superseded frontier entries that were discarded.
    pub stale: usize,
}

impl<C: Copy> SearchOutcome<C> {
    pub fn distance(&self, cell: &Cell) -> Option<C> {
        self.distances.get_point(Point::from(*cell)).copied().flatten()
    }
    pub fn predecessor(&self, cell: &Cell) -> Option<Cell> {
        self.predecessors.get_point(Point::from(*cell)).copied().flatten()
    }
    /// Cost of the goal, [None] if it was not reached.
    pub fn goal_distance(&self) -> Option<C> {
        if self.reached {
            self.distance(&self.goal)
        } else {
            None
        }
    }
    /// The path found by the search, or the empty path if the goal was not reached.
    pub fn path(&self) -> Path {
        if self.reached {
            reconstruct(&self.predecessors, self.start, self.goal)
        } else {
            Path::empty()
        }
    }
}

/// Runs the search from `start` until `goal` is popped or the frontier is exhausted.
///
/// `successors` yields the neighbours of a cell together with the cost of moving there, in the
/// order they should be relaxed. `heuristic` estimates the remaining cost to the goal and must
/// never overestimate it. Entries whose cost exceeds the recorded distance of their cell when popped
/// are stale and skipped.
pub fn uniform_cost_search<C, FN, IN, FH>(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    mut successors: FN,
    mut heuristic: FH,
) -> SearchOutcome<C>
where
    C: Zero + Ord + Copy,
    FN: FnMut(&Cell) -> IN,
    IN: IntoIterator<Item = (Cell, C)>,
    FH: FnMut(&Cell) -> C,
{
    let mut ct: SearchContext<C> = SearchContext::new(grid, start);
    let mut reached = false;
    let mut expanded = 0;
    let mut stale = 0;
    while let Some(SmallestCostHolder { cost, cell, .. }) = ct.frontier.pop() {
        // A cell may sit in the heap several times if a better way to reach it was found after it
        // was pushed. Only the entry matching the recorded distance is processed.
        if ct.distance(&cell).map_or(true, |known| cost > known) {
            stale += 1;
            continue;
        }
        if cell == goal {
            reached = true;
            break;
        }
        expanded += 1;
        for (successor, move_cost) in successors(&cell) {
            let new_cost = cost + move_cost;
            if ct.relax(&successor, new_cost, &cell) {
                let h = heuristic(&successor);
                ct.push(new_cost + h, new_cost, successor);
            }
        }
    }
    debug!(
        "Search {} -> {}: reached {}, expanded {} cells, skipped {} stale entries",
        start, goal, reached, expanded, stale
    );
    SearchOutcome {
        start,
        goal,
        distances: ct.distances,
        predecessors: ct.predecessors,
        reached,
        expanded,
        stale,
    }
}
