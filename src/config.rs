use crate::algorithms::node::Heuristic;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// The built-in 28x15 maze.
    Classic,
    /// A seeded random board of `--width` x `--height`.
    Random,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value_t = Layout::Classic)]
    pub layout: Layout,

    #[arg(long, default_value_t = 28)]
    pub width: usize,

    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Walls scattered on a random layout.
    #[arg(long, default_value_t = 60)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 2)]
    pub num_enemies: usize,

    /// Cells the player advances per tick.
    #[arg(long, default_value_t = 1)]
    pub player_speed: usize,

    /// Cells each enemy advances per tick.
    #[arg(long, default_value_t = 2)]
    pub enemy_speed: usize,

    /// Ticks between obstacle edits; 0 disables them.
    #[arg(long, default_value_t = 5)]
    pub obstacle_interval: usize,

    /// Cells toggled per obstacle edit.
    #[arg(long, default_value_t = 3)]
    pub num_obstacles: usize,

    #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
    pub heuristic: Heuristic,

    #[arg(long, default_value_t = 500)]
    pub max_ticks: usize,

    /// Captures before the run is called off.
    #[arg(long, default_value_t = 3)]
    pub max_captures: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["maze_pathfinding"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let config = Config::default();
        assert_eq!(config.layout, Layout::Classic);
        assert_eq!(config.num_enemies, 2);
        assert_eq!(config.player_speed, 1);
        assert_eq!(config.enemy_speed, 2);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "maze_pathfinding",
            "--layout",
            "random",
            "--heuristic",
            "octile",
            "--seed",
            "42",
            "--no-visualization",
        ]);
        assert_eq!(config.layout, Layout::Random);
        assert_eq!(config.heuristic, Heuristic::Octile);
        assert_eq!(config.seed, Some(42));
        assert!(config.no_visualization);
    }

    #[test]
    fn quiet_runs_only_log_warnings() {
        assert_eq!(Config::default().log_filter(), "info");
        let quiet = Config::parse_from(["maze_pathfinding", "--quiet"]);
        assert!(quiet.quiet);
        assert_eq!(quiet.log_filter(), "warn");
    }
}
