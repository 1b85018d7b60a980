use crate::agent::{AgentPlan, PlanState};
use crate::algorithms::a_star::AStar;
use crate::algorithms::common::{PathfindingAlgorithm, SearchOutcome};
use crate::algorithms::reference::Dijkstra;
use crate::config::{Config, Layout};
use crate::error::{PathError, Result};
use crate::grid::{Cell, Grid};
use crate::layout;
use crate::statistics::Statistics;
use log::{debug, info, log, warn, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::thread;
use std::time::Duration;

/// Board plus where everyone starts.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub player_start: Cell,
    pub goal: Cell,
    pub enemy_starts: Vec<Cell>,
}

impl Scenario {
    pub fn generate(config: &Config, rng: &mut StdRng) -> Result<Self> {
        match config.layout {
            Layout::Classic => Self::classic(config.num_enemies, rng),
            Layout::Random => Self::random(config, rng),
        }
    }

    /// The built-in maze. Enemies beyond the two fixed spawns are placed at random.
    pub fn classic(num_enemies: usize, rng: &mut StdRng) -> Result<Self> {
        let grid = layout::classic()?;
        let mut taken = vec![layout::PLAYER_START, layout::PLAYER_GOAL];
        let mut enemy_starts: Vec<Cell> = layout::ENEMY_STARTS.iter().copied().take(num_enemies).collect();
        taken.extend(enemy_starts.iter().copied());

        while enemy_starts.len() < num_enemies {
            let cell = grid
                .random_open_cell(&taken, rng)
                .ok_or_else(|| PathError::Config("no room left to place enemies".to_string()))?;
            enemy_starts.push(cell);
            taken.push(cell);
        }

        Ok(Scenario {
            grid,
            player_start: layout::PLAYER_START,
            goal: layout::PLAYER_GOAL,
            enemy_starts,
        })
    }

    /// Start in the top-left quarter, goal in the bottom-right, walls scattered between.
    pub fn random(config: &Config, rng: &mut StdRng) -> Result<Self> {
        let (width, height) = (config.width, config.height);
        if width < 2 || height < 2 {
            return Err(PathError::Config(format!(
                "random layout needs at least a 2x2 grid, got {}x{}",
                width, height
            )));
        }

        let (w, h) = (width as i32, height as i32);
        let player_start = Cell::new(rng.gen_range(0..w / 2), rng.gen_range(0..h / 2));
        let goal = Cell::new(rng.gen_range(w / 2..w), rng.gen_range(h / 2..h));
        let grid = Grid::with_random_walls(width, height, config.num_walls, &[player_start, goal], rng);

        let mut taken = vec![player_start, goal];
        let mut enemy_starts = Vec::with_capacity(config.num_enemies);
        for _ in 0..config.num_enemies {
            let cell = grid
                .random_open_cell(&taken, rng)
                .ok_or_else(|| PathError::Config("no room left to place enemies".to_string()))?;
            enemy_starts.push(cell);
            taken.push(cell);
        }

        Ok(Scenario {
            grid,
            player_start,
            goal,
            enemy_starts,
        })
    }

    fn validate(&self) -> Result<()> {
        let named = [("player start", self.player_start), ("goal", self.goal)];
        let enemies = self.enemy_starts.iter().map(|&cell| ("enemy start", cell));
        for (what, cell) in named.into_iter().chain(enemies) {
            if !self.grid.is_open(cell) {
                return Err(PathError::Config(format!(
                    "{} {} is outside the grid or on a wall",
                    what, cell
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Captured,
    Arrived,
}

/// Headless game loop: a player heading for a goal, enemies chasing the
/// player, and obstacles toggled between ticks.
///
/// Every agent replans from scratch every tick.
pub struct Simulation {
    grid: Grid,
    player: AgentPlan,
    player_start: Cell,
    enemies: Vec<AgentPlan>,
    pathfinder: AStar,
    config: Config,
    rng: StdRng,
    stats: Statistics,
}

fn rng_for(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn replan_agent(plan: &mut AgentPlan, grid: &Grid, pathfinder: &mut AStar, stats: &mut Statistics) {
    let previous = plan.state();
    let state = plan.replan(grid, pathfinder);
    let search = pathfinder.last_stats();
    stats.replans += 1;
    stats.nodes_expanded += search.expanded;
    stats.stale_entries_skipped += search.stale_skipped;
    if state == PlanState::Searching {
        stats.exhausted_replans += 1;
        log!(
            exhaustion_level(previous),
            "no path from {} to {}",
            plan.current(),
            plan.goal()
        );
    }
}

/// A plan that just lost its path warns once; repeats while still searching go to debug.
fn exhaustion_level(previous: PlanState) -> Level {
    match previous {
        PlanState::Moving => Level::Warn,
        PlanState::Searching => Level::Debug,
    }
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self> {
        let mut rng = rng_for(&config);
        let scenario = Scenario::generate(&config, &mut rng)?;
        Self::build(config, scenario, rng)
    }

    pub fn with_scenario(config: Config, scenario: Scenario) -> Result<Self> {
        let rng = rng_for(&config);
        Self::build(config, scenario, rng)
    }

    fn build(config: Config, scenario: Scenario, rng: StdRng) -> Result<Self> {
        scenario.validate()?;

        // Score the run against the optimal route on the starting board.
        let Scenario {
            grid,
            player_start,
            goal,
            enemy_starts,
        } = scenario;
        let mut reference = Dijkstra::new();
        let (optimal_cost, optimal_path_length) = match reference.search(&grid, goal, player_start) {
            SearchOutcome::Found(field) => {
                let cost = field.cost_from(player_start).unwrap_or(0);
                let steps = field
                    .path_from(player_start)
                    .map_or(0, |path| path.len().saturating_sub(1));
                (cost, steps)
            }
            SearchOutcome::Exhausted => {
                return Err(PathError::NoPathFound {
                    origin: goal,
                    destination: player_start,
                })
            }
        };

        let enemies = enemy_starts
            .into_iter()
            .map(|start| AgentPlan::new(start, player_start))
            .collect();

        Ok(Simulation {
            grid,
            player: AgentPlan::new(player_start, goal),
            player_start,
            enemies,
            pathfinder: AStar::with_heuristic(config.heuristic),
            config,
            rng,
            stats: Statistics::new(optimal_cost, optimal_path_length),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &AgentPlan {
        &self.player
    }

    pub fn enemies(&self) -> &[AgentPlan] {
        &self.enemies
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Advances the world by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.stats.ticks += 1;

        let interval = self.config.obstacle_interval;
        if interval > 0 && self.stats.ticks % interval == 0 {
            self.edit_obstacles();
        }

        replan_agent(&mut self.player, &self.grid, &mut self.pathfinder, &mut self.stats);
        let target = self.player.current();
        for enemy in &mut self.enemies {
            enemy.set_goal(target);
            replan_agent(enemy, &self.grid, &mut self.pathfinder, &mut self.stats);
        }

        for _ in 0..self.config.player_speed {
            if self.player.state() != PlanState::Moving || self.player.has_arrived() {
                break;
            }
            match self.player.advance() {
                Ok(_) => self.stats.player_moves += 1,
                Err(err) => {
                    warn!("player could not advance: {}", err);
                    break;
                }
            }
        }

        let player_cell = self.player.current();
        let mut captured = self.enemies.iter().any(|enemy| enemy.current() == player_cell);
        'enemies: for enemy in &mut self.enemies {
            if captured {
                break;
            }
            for _ in 0..self.config.enemy_speed {
                if enemy.state() != PlanState::Moving || enemy.has_arrived() {
                    break;
                }
                match enemy.advance() {
                    Ok(cell) => {
                        self.stats.enemy_moves += 1;
                        if cell == player_cell {
                            captured = true;
                            break 'enemies;
                        }
                    }
                    Err(err) => {
                        warn!("enemy could not advance: {}", err);
                        break;
                    }
                }
            }
        }

        if captured {
            self.stats.captures += 1;
            info!("player caught at {} on tick {}", player_cell, self.stats.ticks);
            self.respawn();
            return TickOutcome::Captured;
        }

        if self.player.has_arrived() {
            self.stats.reached_goal = true;
            return TickOutcome::Arrived;
        }
        TickOutcome::Running
    }

    /// Runs until the player arrives, is caught `max_captures` times, or
    /// `max_ticks` elapse.
    pub fn run(&mut self) -> Statistics {
        info!(
            "starting run: player {} -> {}, {} enemies, {:?} heuristic",
            self.player.current(),
            self.player.goal(),
            self.enemies.len(),
            self.pathfinder.heuristic()
        );
        self.draw("start");

        while self.stats.ticks < self.config.max_ticks {
            let outcome = self.tick();
            match outcome {
                TickOutcome::Arrived => {
                    self.draw("player reached the goal");
                    break;
                }
                TickOutcome::Captured => {
                    self.draw("player caught, respawning");
                    if self.stats.captures >= self.config.max_captures {
                        break;
                    }
                }
                TickOutcome::Running => self.draw("running"),
            }
        }

        self.stats.calculate_efficiency();
        info!(
            "run finished after {} ticks: goal reached = {}, captures = {}",
            self.stats.ticks, self.stats.reached_goal, self.stats.captures
        );
        self.stats.clone()
    }

    /// Toggles up to `num_obstacles` random cells, skipping any cell an agent
    /// stands on, the goal, and the player's spawn.
    fn edit_obstacles(&mut self) {
        let mut protected = vec![self.player_start, self.player.current(), self.player.goal()];
        protected.extend(self.enemies.iter().map(AgentPlan::current));

        let (width, height) = (self.grid.width() as i32, self.grid.height() as i32);
        for _ in 0..self.config.num_obstacles {
            let cell = Cell::new(self.rng.gen_range(0..width), self.rng.gen_range(0..height));
            if protected.contains(&cell) {
                continue;
            }
            match self.grid.toggle_block(cell) {
                Ok(blocked) => {
                    self.stats.obstacle_edits += 1;
                    debug!("{} {}", if blocked { "blocked" } else { "cleared" }, cell);
                }
                Err(err) => warn!("obstacle edit rejected: {}", err),
            }
        }
    }

    /// Puts the player back on its spawn and scatters the enemies.
    fn respawn(&mut self) {
        self.player.reposition(self.player_start);
        let mut taken = vec![self.player_start, self.player.goal()];
        for enemy in &mut self.enemies {
            match self.grid.random_open_cell(&taken, &mut self.rng) {
                Some(cell) => {
                    enemy.reposition(cell);
                    taken.push(cell);
                }
                None => warn!("no free cell to respawn enemy at {}", enemy.current()),
            }
            enemy.set_goal(self.player_start);
        }
    }

    /// Text board with the player's remaining route drawn as arrows.
    pub fn board(&self) -> String {
        self.grid.render(&self.overlay())
    }

    /// Agent, goal and route glyphs keyed by cell; later inserts win.
    fn overlay(&self) -> FxHashMap<Cell, char> {
        let mut overlay: FxHashMap<Cell, char> = FxHashMap::default();
        if let (Some(path), Some(field)) = (self.player.path(), self.player.field()) {
            for cell in path {
                if let Some(direction) = field.get(cell) {
                    overlay.insert(cell, direction.arrow());
                }
            }
        }
        overlay.insert(self.player.goal(), 'G');
        for enemy in &self.enemies {
            overlay.insert(enemy.current(), 'E');
        }
        overlay.insert(self.player.current(), 'P');
        overlay
    }

    fn draw(&self, status: &str) {
        if self.config.no_visualization {
            return;
        }
        self.clear_screen();
        println!("=== MAZE PATHFINDING ===");
        println!(
            "Tick: {} | Moves: {} | Captures: {} | {}",
            self.stats.ticks, self.stats.player_moves, self.stats.captures, status
        );
        self.grid.print_grid(&self.overlay());
        thread::sleep(Duration::from_millis(self.config.delay_ms));
    }

    /// Clear the terminal screen (only used when visualization is enabled)
    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}
