//! Per-cell search bookkeeping and the cost model shared by every search.
//!
//! Costs are fixed-point integers in tenths of a cell: an orthogonal step
//! costs 10 and a diagonal step 14.

use crate::direction::{Direction, DIAGONAL_COST, ORTHOGONAL_COST};
use crate::grid::Cell;
use clap::ValueEnum;

/// Distance estimate from a cell to the search's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Heuristic {
    /// `10 * (|dx| + |dy|)`. Exact on open boards; can overestimate once
    /// walls force a detour, since a diagonal step costs 14 but is scored 20.
    #[default]
    Manhattan,
    /// `10 * max(|dx|, |dy|) + 4 * min(|dx|, |dy|)`. Never overestimates.
    Octile,
}

impl Heuristic {
    pub fn estimate(self, from: Cell, to: Cell) -> u32 {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        match self {
            Heuristic::Manhattan => ORTHOGONAL_COST * (dx + dy),
            Heuristic::Octile => {
                let (long, short) = if dx > dy { (dx, dy) } else { (dy, dx) };
                ORTHOGONAL_COST * long + (DIAGONAL_COST - ORTHOGONAL_COST) * short
            }
        }
    }
}

/// Search state for one visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRecord {
    pub cell: Cell,
    /// Accumulated cost from the search root.
    pub g: u32,
    /// Queue priority, `g` plus the heuristic estimate.
    pub f: u32,
    /// Step from this cell back toward the root; `None` only for the root.
    pub direction: Option<Direction>,
}

impl SearchRecord {
    pub fn root(cell: Cell) -> Self {
        SearchRecord {
            cell,
            g: 0,
            f: 0,
            direction: None,
        }
    }

    /// Record for `successor` reached through `self`.
    pub fn successor(&self, successor: Cell, g: u32, h: u32) -> Self {
        SearchRecord {
            cell: successor,
            g,
            f: g + h,
            direction: successor.direction_to(self.cell),
        }
    }

    /// Cost of reaching the adjacent `successor` through this record.
    pub fn cost_to(&self, successor: Cell) -> u32 {
        if self.cell.squared_distance(successor) == 1 {
            self.g + ORTHOGONAL_COST
        } else {
            self.g + DIAGONAL_COST
        }
    }
}
