use crate::algorithms::common::{DirectionField, PathfindingAlgorithm, SearchOutcome};
use crate::grid::{Cell, Grid};
use pathfinding::prelude::dijkstra_all;

/// Uninformed shortest-path baseline built on the `pathfinding` crate.
///
/// Explores the whole reachable component from the origin, so its field is
/// exact for every cell it contains. Used to score runs and to check the
/// A* engine against a known-optimal answer.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn search(&mut self, grid: &Grid, origin: Cell, destination: Cell) -> SearchOutcome {
        if !grid.in_bounds(origin) || !grid.in_bounds(destination) {
            return SearchOutcome::Exhausted;
        }

        let parents = dijkstra_all(&origin, |cell| {
            grid.neighbors(*cell)
                .into_iter()
                .filter_map(|next| cell.direction_to(next).map(|d| (next, d.cost())))
                .collect::<Vec<_>>()
        });

        if destination != origin && !parents.contains_key(&destination) {
            return SearchOutcome::Exhausted;
        }

        let steps = parents
            .into_iter()
            .filter_map(|(cell, (parent, _))| cell.direction_to(parent).map(|d| (cell, d)))
            .collect();
        SearchOutcome::Found(DirectionField::new(origin, steps))
    }
}
