use crate::direction::Direction;
use crate::error::{PathError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Integer grid coordinate. Ordering is by `x`, then `y`; the search uses
/// it to break priority ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The adjacent cell one step away in `direction`. May lie outside the grid.
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Direction of the unit step from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::from_offset(other.x - self.x, other.y - self.y)
    }

    pub fn squared_distance(self, other: Cell) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size board with a mutable set of blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    blocked: FxHashSet<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            blocked: FxHashSet::default(),
        }
    }

    /// Builds a grid with an initial wall list. Every wall must lie inside the grid.
    pub fn with_blocks<I>(width: usize, height: usize, blocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = Grid::new(width, height);
        for cell in blocks {
            grid.add_block(cell)?;
        }
        Ok(grid)
    }

    /// Scatters up to `num_walls` walls at random, never on a `keep_clear` cell.
    pub fn with_random_walls<R: Rng>(
        width: usize,
        height: usize,
        num_walls: usize,
        keep_clear: &[Cell],
        rng: &mut R,
    ) -> Self {
        let mut grid = Grid::new(width, height);
        if width == 0 || height == 0 {
            return grid;
        }

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let cell = Cell::new(
                rng.gen_range(0..width as i32),
                rng.gen_range(0..height as i32),
            );
            if !keep_clear.contains(&cell) && grid.blocked.insert(cell) {
                walls_placed += 1;
            }
            attempts += 1;
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// True when `cell` is not blocked. Bounds are not checked here.
    pub fn passable(&self, cell: Cell) -> bool {
        !self.blocked.contains(&cell)
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.passable(cell)
    }

    fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Blocks `cell`. Returns whether it was previously passable.
    pub fn add_block(&mut self, cell: Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        Ok(self.blocked.insert(cell))
    }

    /// Clears `cell`. Returns whether it was previously blocked.
    pub fn remove_block(&mut self, cell: Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        Ok(self.blocked.remove(&cell))
    }

    /// Flips `cell` between blocked and passable. Returns whether it is now blocked.
    pub fn toggle_block(&mut self, cell: Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        if self.blocked.remove(&cell) {
            Ok(false)
        } else {
            self.blocked.insert(cell);
            Ok(true)
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocked.len()
    }

    /// Blocked cells in sorted order.
    pub fn walls(&self) -> Vec<Cell> {
        let mut walls: Vec<Cell> = self.blocked.iter().copied().collect();
        walls.sort_unstable();
        walls
    }

    /// The in-bounds, passable cells adjacent to `cell`, in `Direction::ALL` order.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .into_iter()
            .map(|direction| cell.step(direction))
            .filter(|&next| self.in_bounds(next) && self.passable(next))
            .collect()
    }

    /// Picks a random passable cell that is not in `exclude`.
    pub fn random_open_cell<R: Rng>(&self, exclude: &[Cell], rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
            .filter(|cell| self.passable(*cell) && !exclude.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }

    /// Text rendering of the board: `#` for walls, `.` for floor, and any
    /// glyph from `overlay` drawn on top.
    pub fn render(&self, overlay: &FxHashMap<Cell, char>) -> String {
        let mut out = String::new();

        out.push_str("   ");
        for x in 0..self.width {
            out.push_str(&format!("{:2}", x % 10));
        }
        out.push('\n');

        for y in 0..self.height as i32 {
            out.push_str(&format!("{:2} ", y));
            for x in 0..self.width as i32 {
                let cell = Cell::new(x, y);
                let glyph = match overlay.get(&cell) {
                    Some(&glyph) => glyph,
                    None if !self.passable(cell) => '#',
                    None => '.',
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Print a visual representation of the grid
    pub fn print_grid(&self, overlay: &FxHashMap<Cell, char>) {
        println!("Legend: P=Player, E=Enemy, G=Goal, #=Wall, .=Empty");
        println!("{}", self.render(overlay));
    }
}
