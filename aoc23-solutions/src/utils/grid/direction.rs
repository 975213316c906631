use super::{Coord, GridError};

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order neighbour lists are produced.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The direction of the unit step from `from` to `to`.
    ///
    /// Fails with [`GridError::NotAdjacent`] for diagonal, distant or
    /// identical coordinates.
    pub fn between(from: Coord, to: Coord) -> Result<Direction, GridError> {
        if !from.is_adjacent(to) {
            return Err(GridError::NotAdjacent { from, to });
        }

        Ok(if to.y > from.y {
            Direction::South
        } else if to.y < from.y {
            Direction::North
        } else if to.x > from.x {
            Direction::East
        } else {
            Direction::West
        })
    }
}
