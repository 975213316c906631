use std::fmt;

use thiserror::Error;

use crate::utils::grid::Direction;

/// The six pipe shapes, each joining exactly two sides of its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
}

/// Which two sides each pipe opens onto.
const CONNECTIONS: [(Pipe, [Direction; 2]); 6] = [
    (Pipe::Vertical, [Direction::North, Direction::South]),
    (Pipe::Horizontal, [Direction::East, Direction::West]),
    (Pipe::NorthEast, [Direction::North, Direction::East]),
    (Pipe::NorthWest, [Direction::North, Direction::West]),
    (Pipe::SouthWest, [Direction::South, Direction::West]),
    (Pipe::SouthEast, [Direction::South, Direction::East]),
];

impl Pipe {
    pub fn directions(self) -> [Direction; 2] {
        CONNECTIONS
            .iter()
            .find_map(|&(pipe, dirs)| (pipe == self).then_some(dirs))
            .unwrap_or_else(|| unreachable!("every pipe has a connection entry"))
    }

    pub fn connects(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }

    /// The pipe joining `a` and `b`, in either order. `None` when `a == b`.
    pub fn from_directions(a: Direction, b: Direction) -> Option<Pipe> {
        CONNECTIONS
            .iter()
            .find(|(_, dirs)| *dirs == [a, b] || *dirs == [b, a])
            .map(|&(pipe, _)| pipe)
    }

    pub const fn symbol(self) -> char {
        match self {
            Pipe::Vertical => '|',
            Pipe::Horizontal => '-',
            Pipe::NorthEast => 'L',
            Pipe::NorthWest => 'J',
            Pipe::SouthWest => '7',
            Pipe::SouthEast => 'F',
        }
    }
}

/// One cell of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`
    Ground,
    /// `S` whose shape has not been worked out yet; connects everywhere.
    Start,
    Pipe(Pipe),
}

impl Tile {
    /// Whether this tile has an opening toward `direction`.
    pub fn connects(self, direction: Direction) -> bool {
        match self {
            Tile::Ground => false,
            Tile::Start => true,
            Tile::Pipe(pipe) => pipe.connects(direction),
        }
    }

    pub fn pipe(self) -> Option<Pipe> {
        match self {
            Tile::Pipe(pipe) => Some(pipe),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognised tile {0:?}")]
pub struct UnknownTile(pub char);

impl TryFrom<char> for Tile {
    type Error = UnknownTile;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '.' => Tile::Ground,
            'S' => Tile::Start,
            '|' => Tile::Pipe(Pipe::Vertical),
            '-' => Tile::Pipe(Pipe::Horizontal),
            'L' => Tile::Pipe(Pipe::NorthEast),
            'J' => Tile::Pipe(Pipe::NorthWest),
            '7' => Tile::Pipe(Pipe::SouthWest),
            'F' => Tile::Pipe(Pipe::SouthEast),
            other => return Err(UnknownTile(other)),
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Tile::Ground => '.',
            Tile::Start => 'S',
            Tile::Pipe(pipe) => pipe.symbol(),
        };
        write!(f, "{symbol}")
    }
}

/// Inside/outside state of the four quarters of one cell, relative to the
/// loop.
///
/// A loop pipe runs through the centre of its cell, so the pipe's arms split
/// the four quarters into two regions: those on the same side as the cell to
/// the left, and the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrants {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Quadrants {
    /// Quarters of a cell whose top-left quarter continues `incoming`, the
    /// state of the top-right quarter of the cell to its left.
    ///
    /// `pipe` is `None` for any cell that is not part of the loop, including
    /// stray pipes.
    pub fn scan(incoming: bool, pipe: Option<Pipe>) -> Self {
        let same = incoming;
        let flip = !incoming;
        let [top_right, bottom_left, bottom_right] = match pipe {
            None => [same, same, same],
            Some(Pipe::Vertical) => [flip, same, flip],
            Some(Pipe::Horizontal) => [same, flip, flip],
            Some(Pipe::NorthEast) => [flip, same, same],
            Some(Pipe::NorthWest) => [flip, flip, flip],
            Some(Pipe::SouthWest) => [same, flip, same],
            Some(Pipe::SouthEast) => [same, same, flip],
        };
        Self {
            top_left: incoming,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// True when the whole cell lies inside the loop.
    pub fn is_inside(&self) -> bool {
        self.top_left && self.top_right && self.bottom_left && self.bottom_right
    }
}
