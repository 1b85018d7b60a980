//! The built-in 28x15 maze.

use crate::error::Result;
use crate::grid::{Cell, Grid};

pub const CLASSIC_WIDTH: usize = 28;
pub const CLASSIC_HEIGHT: usize = 15;

pub const PLAYER_START: Cell = Cell::new(26, 1);
pub const PLAYER_GOAL: Cell = Cell::new(13, 7);
pub const ENEMY_STARTS: [Cell; 2] = [Cell::new(26, 10), Cell::new(0, 2)];

#[rustfmt::skip]
const CLASSIC_WALLS: &[(i32, i32)] = &[
    (2, 0), (0, 11), (23, 14), (0, 0), (1, 0), (3, 0), (17, 0), (18, 0), (19, 0), (20, 0),
    (22, 0), (23, 0), (24, 0), (27, 3), (27, 4), (27, 5), (27, 12), (24, 14), (22, 14),
    (21, 14), (19, 14), (18, 14), (10, 14), (9, 14), (8, 14), (7, 14), (6, 14), (3, 14),
    (4, 14), (2, 14), (0, 14), (0, 13), (0, 12), (0, 9), (0, 8), (0, 7), (0, 5), (0, 4),
    (0, 3), (0, 1), (19, 6), (15, 5), (15, 7), (17, 10), (17, 8), (17, 6), (17, 5), (17, 4),
    (22, 5), (23, 7), (22, 10), (24, 10), (24, 9), (24, 7), (25, 5), (26, 5), (22, 8),
    (19, 10), (13, 12), (6, 5), (4, 8), (5, 12), (7, 12), (7, 10), (6, 8), (3, 5), (3, 3),
    (4, 3), (10, 3), (11, 4), (15, 6), (15, 8), (14, 5), (11, 7), (11, 6), (11, 5), (12, 5),
    (22, 2), (24, 2), (24, 5), (24, 6), (22, 7), (22, 3), (22, 4), (23, 2), (26, 3), (25, 3),
    (24, 3), (20, 6), (19, 5), (19, 7), (19, 8), (19, 9), (20, 10), (21, 10), (20, 8), (25, 9),
    (26, 8), (26, 9), (17, 9), (17, 11), (17, 3), (17, 2), (13, 10), (13, 11), (7, 11),
    (6, 12), (5, 8), (7, 8), (7, 9), (4, 7), (3, 4), (5, 5), (4, 5), (7, 5), (8, 5), (9, 5),
    (11, 3), (13, 2), (13, 3), (15, 3), (14, 3), (15, 1), (6, 6), (8, 8), (10, 8), (9, 12),
    (10, 12), (11, 12), (9, 11), (9, 10), (15, 12), (16, 12), (17, 12), (13, 13), (15, 13),
    (17, 14), (11, 14), (5, 1), (26, 2), (26, 0), (19, 2), (20, 2), (20, 3), (20, 4), (19, 4),
    (26, 7), (19, 12), (20, 12), (21, 12), (22, 12), (23, 12), (24, 12), (24, 11), (26, 12),
    (26, 11), (3, 10), (4, 9), (4, 10), (5, 10), (2, 10), (2, 9), (2, 8), (2, 7), (2, 11),
    (2, 12), (3, 12), (2, 5), (1, 3), (2, 1), (4, 2), (5, 2), (7, 2), (9, 3), (13, 1), (12, 1),
    (11, 1), (6, 4), (8, 3), (8, 2), (10, 1), (27, 14), (26, 14), (8, 7), (11, 8), (11, 9),
    (12, 9), (13, 9), (14, 9), (15, 9), (11, 11), (15, 10), (10, 7), (7, 1), (7, 0), (10, 0),
    (9, 0),
];

pub fn classic() -> Result<Grid> {
    Grid::with_blocks(
        CLASSIC_WIDTH,
        CLASSIC_HEIGHT,
        CLASSIC_WALLS.iter().map(|&(x, y)| Cell::new(x, y)),
    )
}
