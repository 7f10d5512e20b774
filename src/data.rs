use std::fmt;

/// A grid coordinate, 1-indexed in both dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// The neighbouring site in `dir`, or `None` if it falls outside `[1,n]`.
    pub fn step(&self, dir: Direction, n: usize) -> Option<Site> {
        let (row, col) = match dir {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
            Direction::East => (self.row, self.col + 1),
        };
        if row < 1 || row > n || col < 1 || col > n {
            None
        } else {
            Some(Site { row, col })
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}
