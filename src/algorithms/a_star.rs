use crate::algorithms::common::{DirectionField, PathfindingAlgorithm, SearchOutcome, SearchStats};
use crate::algorithms::node::{Heuristic, SearchRecord};
use crate::algorithms::priority_queue::PriorityQueue;
use crate::grid::{Cell, Grid};
use log::{debug, trace};
use rustc_hash::FxHashMap;

/// A* over the 8-connected grid with the 10/14 cost model.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    heuristic: Heuristic,
    last_stats: SearchStats,
}

impl AStar {
    pub fn new() -> Self {
        AStar::default()
    }

    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        AStar {
            heuristic,
            last_stats: SearchStats::default(),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl PathfindingAlgorithm for AStar {
    /// Expands from `origin` in order of `f = g + h`, where `h` estimates the
    /// distance to `destination`. Every visited cell ends up in the returned
    /// field, pointing at the neighbour that gave it its best known cost.
    ///
    /// The queue has no decrease-key: a cheaper route to a visited cell
    /// overwrites its record and pushes a new entry. When an entry is popped,
    /// its priority is checked against the record's current `f`, and
    /// superseded entries are dropped.
    fn search(&mut self, grid: &Grid, origin: Cell, destination: Cell) -> SearchOutcome {
        let mut stats = SearchStats::default();

        if !grid.in_bounds(origin) || !grid.in_bounds(destination) {
            debug!("search {} -> {} skipped: endpoint outside grid", origin, destination);
            self.last_stats = stats;
            return SearchOutcome::Exhausted;
        }

        let mut visited: FxHashMap<Cell, SearchRecord> = FxHashMap::default();
        let mut open = PriorityQueue::new();

        let root = SearchRecord::root(origin);
        visited.insert(origin, root);
        open.push(root.f, origin);
        stats.pushed += 1;

        let found = loop {
            let Some((priority, cell)) = open.pop() else {
                break false;
            };

            let current = match visited.get(&cell) {
                Some(record) if record.f == priority => *record,
                _ => {
                    trace!("skipping stale entry {} at priority {}", cell, priority);
                    stats.stale_skipped += 1;
                    continue;
                }
            };

            if cell == destination {
                break true;
            }
            stats.expanded += 1;

            for next in grid.neighbors(cell) {
                let cost = current.cost_to(next);
                if let Some(existing) = visited.get(&next) {
                    if cost >= existing.g {
                        continue;
                    }
                }

                let record = current.successor(next, cost, self.heuristic.estimate(next, destination));
                visited.insert(next, record);
                open.push(record.f, next);
                stats.pushed += 1;
            }
        };

        debug!(
            "search {} -> {}: {} (expanded {}, pushed {}, stale {})",
            origin,
            destination,
            if found { "found" } else { "exhausted" },
            stats.expanded,
            stats.pushed,
            stats.stale_skipped
        );
        self.last_stats = stats;

        if !found {
            return SearchOutcome::Exhausted;
        }

        let steps = visited
            .into_values()
            .filter_map(|record| record.direction.map(|direction| (record.cell, direction)))
            .collect();
        SearchOutcome::Found(DirectionField::new(origin, steps))
    }

    fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}
