use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compass directions a road can leave a city in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// All four directions, in neighbor-slot order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// The direction a road arrives from, given the direction it left in.
    /// Involutive: `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Case-insensitive lookup of a direction name. Returns `None` for
    /// anything that is not one of the four names; the caller decides
    /// whether that is fatal.
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Some(Direction::North),
            "west" => Some(Direction::West),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            _ => None,
        }
    }

    /// Index into a city's neighbor-slot array
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
            Direction::East => "east",
        };
        write!(f, "{name}")
    }
}
