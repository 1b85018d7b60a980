use std::fmt;

/// Step cost between orthogonally adjacent cells, in tenths of a cell.
pub const ORTHOGONAL_COST: u32 = 10;
/// Step cost between diagonally adjacent cells (10 * sqrt(2), truncated).
pub const DIAGONAL_COST: u32 = 14;

/// One of the eight unit steps between adjacent cells.
///
/// Screen convention: x grows to the east, y grows to the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Direction {
    /// Canonical enumeration order used for neighbour expansion.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Maps a unit offset back to its direction. Anything that is not an
    /// adjacent step (including `(0, 0)`) yields `None`.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.offset() == (dx, dy))
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    pub fn cost(self) -> u32 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    /// Glyph used when drawing a path on the text board.
    pub fn arrow(self) -> char {
        match self {
            Direction::East => '→',
            Direction::West => '←',
            Direction::South => '↓',
            Direction::North => '↑',
            Direction::SouthEast => '↘',
            Direction::SouthWest => '↙',
            Direction::NorthEast => '↗',
            Direction::NorthWest => '↖',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dx, dy) = self.offset();
        write!(f, "({}, {})", dx, dy)
    }
}
