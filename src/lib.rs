//! Grid pathfinding for agents that replan every tick.
//!
//! The engine runs A* from an agent's goal back to the agent, leaving behind
//! a direction field the agent can follow one cell at a time. A headless
//! simulation drives a player and chasing enemies over a board whose walls
//! change between ticks.

pub mod agent;
pub mod algorithms;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod layout;
pub mod simulation;
pub mod statistics;

pub use agent::{AgentPlan, PlanState};
pub use algorithms::a_star::AStar;
pub use algorithms::common::{DirectionField, PathfindingAlgorithm, SearchOutcome, SearchStats};
pub use algorithms::node::Heuristic;
pub use direction::Direction;
pub use error::{PathError, Result};
pub use grid::{Cell, Grid};
