use std::fmt;

use super::Direction;

/// A position on a grid, `x` growing east and `y` growing south.
///
/// Coordinates are plain values: moving produces a new `Coord`. The derived
/// ordering compares `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two coordinates.
    pub const fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` is exactly one step north, east, south or west.
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// The neighbouring coordinate in `direction`, or `None` when it would
    /// fall below zero on either axis.
    ///
    /// Upper bounds are not checked here; that is the grid's business.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let Coord { x, y } = self;
        match direction {
            Direction::North => y.checked_sub(1).map(|y| Coord { x, y }),
            Direction::East => x.checked_add(1).map(|x| Coord { x, y }),
            Direction::South => y.checked_add(1).map(|y| Coord { x, y }),
            Direction::West => x.checked_sub(1).map(|x| Coord { x, y }),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_step_stops_at_zero() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::East), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::South), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_adjacency_excludes_diagonals_and_self() {
        let c = Coord::new(3, 3);
        assert!(c.is_adjacent(Coord::new(3, 2)));
        assert!(c.is_adjacent(Coord::new(4, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 4)));
        assert!(!c.is_adjacent(Coord::new(5, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(7, 12).to_string(), "(7, 12)");
    }

    proptest! {
        #[test]
        fn prop_step_is_adjacent(x in 0usize..1000, y in 0usize..1000) {
            let c = Coord::new(x, y);
            for dir in Direction::ALL {
                if let Some(next) = c.step(dir) {
                    prop_assert!(c.is_adjacent(next));
                    prop_assert_eq!(next.step(dir.opposite()), Some(c));
                }
            }
        }

        #[test]
        fn prop_manhattan_is_symmetric(
            a in (0usize..1000, 0usize..1000),
            b in (0usize..1000, 0usize..1000),
        ) {
            let (a, b) = (Coord::from(a), Coord::from(b));
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
        }
    }
}
