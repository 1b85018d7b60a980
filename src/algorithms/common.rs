use crate::direction::Direction;
use crate::error::{PathError, Result};
use crate::grid::{Cell, Grid};
use rustc_hash::FxHashMap;

/// Per-cell step toward the root of the search that produced it.
///
/// The root itself has no entry. Every other visited cell maps to the
/// direction of the neighbour it was last reached from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionField {
    root: Cell,
    steps: FxHashMap<Cell, Direction>,
}

impl DirectionField {
    pub fn new(root: Cell, steps: FxHashMap<Cell, Direction>) -> Self {
        DirectionField { root, steps }
    }

    pub fn root(&self) -> Cell {
        self.root
    }

    pub fn get(&self, cell: Cell) -> Option<Direction> {
        self.steps.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.steps.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.steps.iter().map(|(&cell, &direction)| (cell, direction))
    }

    /// Follows the stored steps from `start` to the root, both ends included.
    ///
    /// Returns `None` if the walk leaves the field, or takes more steps than
    /// the field has entries.
    pub fn path_from(&self, start: Cell) -> Option<Vec<Cell>> {
        let mut path = vec![start];
        let mut current = start;
        while current != self.root {
            current = current.step(self.get(current)?);
            path.push(current);
            if path.len() > self.steps.len() + 1 {
                return None;
            }
        }
        Some(path)
    }

    /// Total 10/14 cost of the walk returned by [`DirectionField::path_from`].
    pub fn cost_from(&self, start: Cell) -> Option<u32> {
        let path = self.path_from(start)?;
        Some(
            path.windows(2)
                .filter_map(|pair| pair[0].direction_to(pair[1]))
                .map(Direction::cost)
                .sum(),
        )
    }
}

/// Terminal state of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(DirectionField),
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn field(&self) -> Option<&DirectionField> {
        match self {
            SearchOutcome::Found(field) => Some(field),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub pushed: usize,
    pub stale_skipped: usize,
}

pub trait PathfindingAlgorithm {
    /// Searches outward from `origin` until `destination` is reached or the
    /// reachable component is exhausted.
    fn search(&mut self, grid: &Grid, origin: Cell, destination: Cell) -> SearchOutcome;

    /// Counters from the most recent `search`.
    fn last_stats(&self) -> SearchStats {
        SearchStats::default()
    }

    /// Cells from `start` to `goal`, both included. The search is rooted at
    /// `goal` so the returned walk follows the direction field.
    fn find_path(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
        let no_path = PathError::NoPathFound {
            origin: goal,
            destination: start,
        };
        match self.search(grid, goal, start) {
            SearchOutcome::Found(field) => field.path_from(start).ok_or(no_path),
            SearchOutcome::Exhausted => Err(no_path),
        }
    }
}
