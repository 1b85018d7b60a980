use std::fmt;

/// Counters gathered over one simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub ticks: usize,
    pub player_moves: usize,
    pub enemy_moves: usize,
    pub replans: usize,
    pub exhausted_replans: usize,
    pub nodes_expanded: usize,
    pub stale_entries_skipped: usize,
    pub captures: usize,
    pub obstacle_edits: usize,
    /// Optimal cost of the player's route on the starting board.
    pub optimal_cost: u32,
    /// Step count of that optimal route.
    pub optimal_path_length: usize,
    pub route_efficiency: f64,
    pub reached_goal: bool,
}

impl Statistics {
    pub fn new(optimal_cost: u32, optimal_path_length: usize) -> Self {
        Statistics {
            optimal_cost,
            optimal_path_length,
            ..Statistics::default()
        }
    }

    pub fn calculate_efficiency(&mut self) {
        if self.player_moves > 0 && self.optimal_path_length > 0 {
            self.route_efficiency = self.player_moves as f64 / self.optimal_path_length as f64;
        } else {
            self.route_efficiency = 0.0;
        }
    }

    pub fn average_expansions(&self) -> f64 {
        if self.replans == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.replans as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Reached Goal: {}", if self.reached_goal { "yes" } else { "no" })?;
        writeln!(f, "Player Moves: {}", self.player_moves)?;
        writeln!(f, "Enemy Moves: {}", self.enemy_moves)?;
        writeln!(f, "Captures: {}", self.captures)?;
        writeln!(f, "Obstacle Edits: {}", self.obstacle_edits)?;
        writeln!(
            f,
            "Optimal Route: {} steps (cost {})",
            self.optimal_path_length, self.optimal_cost
        )?;
        writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        writeln!(
            f,
            "Replans: {} ({} without a path)",
            self.replans, self.exhausted_replans
        )?;
        writeln!(
            f,
            "Average Expansions per Replan: {:.1}",
            self.average_expansions()
        )?;
        writeln!(f, "Stale Queue Entries Skipped: {}", self.stale_entries_skipped)?;
        Ok(())
    }
}
