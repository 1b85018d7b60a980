use crate::algorithms::common::{DirectionField, PathfindingAlgorithm, SearchOutcome};
use crate::direction::Direction;
use crate::error::{PathError, Result};
use crate::grid::{Cell, Grid};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanState {
    Searching,
    Moving,
}

/// Planning state for one agent: where it is, where it is going, and the
/// direction field from its last successful replan.
///
/// The search is rooted at the goal and stops once it reaches the agent, so
/// the field answers "which way next" for the agent's cell and every cell
/// on the route after it.
#[derive(Debug, Clone)]
pub struct AgentPlan {
    current: Cell,
    goal: Cell,
    state: PlanState,
    field: Option<DirectionField>,
}

impl AgentPlan {
    pub fn new(current: Cell, goal: Cell) -> Self {
        AgentPlan {
            current,
            goal,
            state: PlanState::Searching,
            field: None,
        }
    }

    pub fn current(&self) -> Cell {
        self.current
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn state(&self) -> PlanState {
        self.state
    }

    pub fn field(&self) -> Option<&DirectionField> {
        self.field.as_ref()
    }

    pub fn has_arrived(&self) -> bool {
        self.current == self.goal
    }

    /// Runs a full search from the goal to the current cell.
    ///
    /// On success the new field replaces the old one and the plan moves to
    /// `Moving`. When no path exists the plan stays `Searching` and the old
    /// field is dropped, so `next_step` cannot follow a stale route.
    pub fn replan<P>(&mut self, grid: &Grid, pathfinder: &mut P) -> PlanState
    where
        P: PathfindingAlgorithm + ?Sized,
    {
        self.state = PlanState::Searching;
        match pathfinder.search(grid, self.goal, self.current) {
            SearchOutcome::Found(field) => {
                self.field = Some(field);
                self.state = PlanState::Moving;
            }
            SearchOutcome::Exhausted => {
                debug!("no route from {} to {}", self.current, self.goal);
                self.field = None;
            }
        }
        self.state
    }

    /// Direction to step from `cell` toward the goal.
    ///
    /// Fails with `NoPathRecorded` when there is no field, when `cell` is not
    /// in it, or when `cell` is the goal itself.
    pub fn next_step(&self, cell: Cell) -> Result<Direction> {
        self.field
            .as_ref()
            .filter(|_| cell != self.goal)
            .and_then(|field| field.get(cell))
            .ok_or(PathError::NoPathRecorded { cell })
    }

    /// Moves the agent one cell along its field and returns the new cell.
    pub fn advance(&mut self) -> Result<Cell> {
        let direction = self.next_step(self.current)?;
        self.current = self.current.step(direction);
        Ok(self.current)
    }

    /// The remaining route, from the current cell to the goal.
    pub fn path(&self) -> Option<Vec<Cell>> {
        self.field.as_ref()?.path_from(self.current)
    }

    /// Places the agent on `cell` and forgets the old route.
    pub fn reposition(&mut self, cell: Cell) {
        self.current = cell;
        self.invalidate();
    }

    /// Points the agent at a new goal and forgets the old route.
    pub fn set_goal(&mut self, goal: Cell) {
        if goal != self.goal {
            self.goal = goal;
            self.invalidate();
        }
    }

    fn invalidate(&mut self) {
        self.field = None;
        self.state = PlanState::Searching;
    }
}
