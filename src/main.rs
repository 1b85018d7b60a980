use clap::Parser;
use std::io::Write;

use maze_pathfinding::config::{Config, Layout};
use maze_pathfinding::simulation::Simulation;

fn main() {
    let config = Config::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if !config.quiet {
        println!("Starting maze pathfinding simulation...");
        match config.layout {
            Layout::Classic => println!("Layout: classic 28x15 maze"),
            Layout::Random => println!(
                "Layout: random {}x{} with {} walls",
                config.width, config.height, config.num_walls
            ),
        }
        println!(
            "Enemies: {} | Player speed: {} | Enemy speed: {}",
            config.num_enemies, config.player_speed, config.enemy_speed
        );
        println!("Heuristic: {:?}", config.heuristic);
        if let Some(seed) = config.seed {
            println!("Seed: {}", seed);
        }
        println!();
    }

    let mut simulation = match Simulation::new(config.clone()) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up simulation: {}", e);
            if config.layout == Layout::Random {
                eprintln!("Try reducing --num-walls or changing --seed");
            }
            std::process::exit(1);
        }
    };

    let stats = simulation.run();

    println!("\n=== FINAL RESULTS ===");
    println!("{}", stats);
}
