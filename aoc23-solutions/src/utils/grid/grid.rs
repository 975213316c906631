use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::{Coord, Direction, GridError};
use crate::utils::bfs;

/// A rectangular, row-major grid of cells.
///
/// Always holds at least one row and one column, and every row has the same
/// width. The only structural mutations are [`insert_row`](Self::insert_row)
/// and [`insert_col`](Self::insert_col); anything a caller derived from the
/// old layout (coordinate sets, caches) is stale afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from a sequence of rows.
    ///
    /// # Errors
    /// * [`GridError::Empty`] - no rows, or the first row has no cells
    /// * [`GridError::Ragged`] - a row differs in length from the first
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::Empty),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True iff `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.rows.get(coord.y)?.get(coord.x)
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.rows.get_mut(coord.y)?.get_mut(coord.x)
    }

    /// The cell at `coord`, failing with [`GridError::OutOfBounds`] outside
    /// the grid.
    pub fn at(&self, coord: Coord) -> Result<&T, GridError> {
        self.get(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    pub fn at_mut(&mut self, coord: Coord) -> Result<&mut T, GridError> {
        let err = self.out_of_bounds(coord);
        self.get_mut(coord).ok_or(err)
    }

    /// Overwrite the cell at `coord`, returning the previous value.
    pub fn set(&mut self, coord: Coord, value: T) -> Result<T, GridError> {
        self.at_mut(coord)
            .map(|cell| std::mem::replace(cell, value))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Coord::new(x, y), cell))
        })
    }

    /// Coordinates of every cell matching `predicate`, in row-major order.
    pub fn positions<P>(&self, mut predicate: P) -> impl Iterator<Item = Coord>
    where
        P: FnMut(&T) -> bool,
    {
        self.cells()
            .filter_map(move |(coord, cell)| predicate(cell).then_some(coord))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// In-bounds neighbours of `pos` with the direction leading to each, in
    /// north, east, south, west order.
    ///
    /// No containment check is made on `pos` itself; see
    /// [`adjacent`](Self::adjacent) for the checked form.
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = (Direction, Coord)> {
        Direction::ALL.into_iter().filter_map(move |dir| {
            pos.step(dir)
                .filter(|&next| self.contains(next))
                .map(|next| (dir, next))
        })
    }

    /// The up to four in-bounds cardinal neighbours of `pos`, in north, east,
    /// south, west order.
    ///
    /// # Errors
    /// [`GridError::NotContained`] if `pos` is outside the grid.
    pub fn adjacent(&self, pos: Coord) -> Result<Vec<Coord>, GridError> {
        if !self.contains(pos) {
            return Err(GridError::NotContained(pos));
        }
        Ok(self.neighbors(pos).map(|(_, next)| next).collect())
    }

    /// Manhattan distance, ignoring cell contents entirely.
    pub fn manhattan_distance(&self, from: Coord, to: Coord) -> usize {
        from.manhattan(to)
    }

    /// Fewest unit steps from `from` to `to`, where `passable(src, dst)`
    /// decides whether a single step is allowed. `Ok(None)` when `to` cannot
    /// be reached.
    ///
    /// # Errors
    /// [`GridError::NotContained`] if either endpoint is outside the grid.
    pub fn path_distance<F>(
        &self,
        from: Coord,
        to: Coord,
        mut passable: F,
    ) -> Result<Option<usize>, GridError>
    where
        F: FnMut(Coord, Coord) -> bool,
    {
        if let Some(outside) = [from, to].into_iter().find(|&c| !self.contains(c)) {
            return Err(GridError::NotContained(outside));
        }

        Ok(bfs::distance_between(from, to, |pos| {
            self.neighbors(pos)
                .map(|(_, next)| next)
                .filter(|&next| passable(pos, next))
                .collect::<Vec<_>>()
        }))
    }

    /// Insert a row filled with `fill` before row `offset`; `offset ==
    /// height` appends.
    pub fn insert_row(&mut self, offset: usize, fill: T) -> Result<(), GridError>
    where
        T: Clone,
    {
        if offset > self.height() {
            return Err(GridError::OffsetOutOfRange {
                offset,
                limit: self.height(),
            });
        }
        let row = vec![fill; self.width()];
        self.rows.insert(offset, row);
        Ok(())
    }

    /// Insert a column filled with `fill` before column `offset`; `offset ==
    /// width` appends.
    pub fn insert_col(&mut self, offset: usize, fill: T) -> Result<(), GridError>
    where
        T: Clone,
    {
        if offset > self.width() {
            return Err(GridError::OffsetOutOfRange {
                offset,
                limit: self.width(),
            });
        }
        for row in &mut self.rows {
            row.insert(offset, fill.clone());
        }
        Ok(())
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Grid<U>
    where
        F: FnMut(Coord, T) -> U,
    {
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, cell)| f(Coord::new(x, y), cell))
                    .collect()
            })
            .collect();
        Grid { rows }
    }

    /// Like [`map`](Self::map), stopping at the first cell `f` rejects.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Grid<U>, E>
    where
        F: FnMut(Coord, T) -> Result<U, E>,
    {
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, cell)| f(Coord::new(x, y), cell))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Grid { rows })
    }

    fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            width: self.width(),
            height: self.height(),
        }
    }
}

impl Grid<char> {
    /// Build a character grid, one row per line.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect::<Vec<_>>()),
        )
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

/// Panics if `coord` is outside the grid.
impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.rows[coord.y][coord.x]
    }
}

/// Panics if `coord` is outside the grid.
impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        &mut self.rows[coord.y][coord.x]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EMPTY_MAP: [&str; 10] = [
        "........", "........", "........", "........", "........", "........", "........",
        "........", "........", "........",
    ];

    fn empty_map() -> Grid<char> {
        Grid::from_lines(EMPTY_MAP).unwrap()
    }

    #[test]
    fn test_from_lines_dimensions() {
        let mut grid = empty_map();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 10);

        *grid.at_mut(Coord::new(1, 1)).unwrap() = '#';
        assert_eq!(grid.at(Coord::new(0, 1)), Ok(&'.'));
        assert_eq!(grid.at(Coord::new(1, 1)), Ok(&'#'));
    }

    #[test]
    fn test_from_rows_arbitrary_cells() {
        #[derive(Debug, Clone, PartialEq)]
        struct Node {
            label: &'static str,
            value: i64,
        }

        let n1 = Node { label: "foo", value: 1 };
        let n2 = Node { label: "bar", value: -999_999_999 };
        let n3 = Node { label: "baz", value: 51_293_786 };
        let n4 = Node { label: "qux", value: -3 };
        let grid = Grid::from_rows(vec![
            vec![n1.clone(), n2.clone()],
            vec![n3.clone(), n4.clone()],
        ])
        .unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Coord::new(0, 0)], n1);
        assert_eq!(grid[Coord::new(1, 0)], n2);
        assert_eq!(grid[Coord::new(0, 1)], n3);
        assert_eq!(grid[Coord::new(1, 1)], n4);
    }

    #[test]
    fn test_shape_errors() {
        let no_rows: Vec<Vec<u8>> = vec![];
        assert_eq!(Grid::from_rows(no_rows), Err(GridError::Empty));
        assert_eq!(Grid::from_lines([""]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_lines(["...", "..", "..."]),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_str_ignores_trailing_newline() {
        let grid: Grid<char> = "ab\ncd\n".parse().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "ab\ncd");
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = empty_map();
        let outside = Coord::new(8, 0);
        assert_eq!(grid.get(outside), None);
        assert_eq!(
            grid.at(outside),
            Err(GridError::OutOfBounds {
                coord: outside,
                width: 8,
                height: 10
            })
        );
        assert!(grid.set(Coord::new(0, 10), '#').is_err());
        assert_eq!(grid.set(Coord::new(0, 9), '#'), Ok('.'));
    }

    #[test]
    fn test_insert_row() {
        let mut grid = empty_map();
        let row = 2;

        grid.insert_row(row, '#').unwrap();
        assert_eq!(grid.height(), 11);
        for c in grid.coords() {
            let expected = if c.y == row { '#' } else { '.' };
            assert_eq!(grid[c], expected, "at {c}");
        }
    }

    #[test]
    fn test_insert_column() {
        let mut grid = empty_map();
        let col = 5;

        grid.insert_col(col, '#').unwrap();
        assert_eq!(grid.width(), 9);
        for c in grid.coords() {
            let expected = if c.x == col { '#' } else { '.' };
            assert_eq!(grid[c], expected, "at {c}");
        }
    }

    #[test]
    fn test_insert_offset_limits() {
        let mut grid = Grid::from_lines(["ab", "cd", "ef"]).unwrap();

        // rows are bounded by the height, not the width
        assert!(grid.insert_row(3, '.').is_ok());
        assert_eq!(
            grid.insert_row(5, '.'),
            Err(GridError::OffsetOutOfRange { offset: 5, limit: 4 })
        );
        assert!(grid.insert_col(2, '.').is_ok());
        assert_eq!(
            grid.insert_col(4, '.'),
            Err(GridError::OffsetOutOfRange { offset: 4, limit: 3 })
        );
        assert_eq!(grid.to_string(), "ab.\ncd.\nef.\n...");
    }

    #[test]
    fn test_adjacent() {
        let grid = empty_map();
        let cases = [
            (Coord::new(0, 0), vec![Coord::new(1, 0), Coord::new(0, 1)]),
            (
                Coord::new(1, 6),
                vec![
                    Coord::new(1, 5),
                    Coord::new(2, 6),
                    Coord::new(1, 7),
                    Coord::new(0, 6),
                ],
            ),
            (
                Coord::new(7, 5),
                vec![Coord::new(7, 4), Coord::new(7, 6), Coord::new(6, 5)],
            ),
        ];

        for (pos, expected) in cases {
            assert_eq!(grid.adjacent(pos).unwrap(), expected, "with pos={pos}");
        }

        assert_eq!(
            grid.adjacent(Coord::new(8, 0)),
            Err(GridError::NotContained(Coord::new(8, 0)))
        );
    }

    #[test]
    fn test_manhattan_distance() {
        let grid = empty_map();
        let p1 = Coord::new(0, 0);
        let p2 = Coord::new(1, 6);
        let p3 = Coord::new(7, 5);

        assert_eq!(grid.manhattan_distance(p1, p1), 0);
        assert_eq!(grid.manhattan_distance(p1, p2), 7);
        assert_eq!(grid.manhattan_distance(p1, p3), 12);
        assert_eq!(grid.manhattan_distance(p3, p2), 7);
    }

    #[test]
    fn test_path_distance_around_walls() {
        let grid: Grid<char> = "\
.#...
.#.#.
...#.
####.
....."
            .parse()
            .unwrap();
        let open = |_: Coord, dst: Coord| grid[dst] != '#';

        assert_eq!(
            grid.path_distance(Coord::new(0, 0), Coord::new(2, 0), open),
            Ok(Some(6))
        );
        assert_eq!(
            grid.path_distance(Coord::new(0, 0), Coord::new(0, 4), open),
            Ok(Some(16))
        );
        assert_eq!(
            grid.path_distance(Coord::new(0, 0), Coord::new(0, 0), open),
            Ok(Some(0))
        );
    }

    #[test]
    fn test_path_distance_unreachable_and_outside() {
        let grid: Grid<char> = "..#..".parse().unwrap();
        let open = |_: Coord, dst: Coord| grid[dst] != '#';

        assert_eq!(
            grid.path_distance(Coord::new(0, 0), Coord::new(4, 0), open),
            Ok(None)
        );
        assert_eq!(
            grid.path_distance(Coord::new(0, 0), Coord::new(5, 0), open),
            Err(GridError::NotContained(Coord::new(5, 0)))
        );
    }

    #[test]
    fn test_positions_and_map() {
        let grid: Grid<char> = "#..\n..#".parse().unwrap();
        let marks: Vec<_> = grid.positions(|&c| c == '#').collect();
        assert_eq!(marks, vec![Coord::new(0, 0), Coord::new(2, 1)]);

        let flags = grid.clone().map(|_, c| c == '#');
        assert!(flags[Coord::new(2, 1)]);
        assert!(!flags[Coord::new(1, 1)]);

        let digits = grid.try_map(|coord, c| match c {
            '.' => Ok(0),
            _ => Err(coord),
        });
        assert_eq!(digits, Err(Coord::new(0, 0)));
    }

    fn rect_cells() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::collection::vec(any::<u8>(), w), h)
        })
    }

    proptest! {
        #[test]
        fn prop_from_rows_round_trips(rows in rect_cells()) {
            let grid = Grid::from_rows(rows.clone()).unwrap();
            prop_assert_eq!(grid.width(), rows[0].len());
            prop_assert_eq!(grid.height(), rows.len());
            for (y, row) in rows.iter().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    prop_assert_eq!(grid.at(Coord::new(x, y)), Ok(cell));
                }
            }
        }

        #[test]
        fn prop_adjacent_is_in_bounds_and_ordered(rows in rect_cells(), seed in any::<usize>()) {
            let grid = Grid::from_rows(rows).unwrap();
            let coords: Vec<_> = grid.coords().collect();
            let pos = coords[seed % coords.len()];
            let adjacent = grid.adjacent(pos).unwrap();

            let mut dirs = Vec::new();
            for next in &adjacent {
                prop_assert!(grid.contains(*next));
                dirs.push(Direction::between(pos, *next).unwrap());
            }
            let expected: Vec<_> = Direction::ALL
                .into_iter()
                .filter(|d| pos.step(*d).is_some_and(|n| grid.contains(n)))
                .collect();
            prop_assert_eq!(dirs, expected);
        }

        #[test]
        fn prop_insertion_preserves_cells(
            rows in rect_cells(),
            row_seed in any::<usize>(),
            col_seed in any::<usize>(),
            fill in any::<u8>(),
        ) {
            let original = Grid::from_rows(rows).unwrap();
            let row_at = row_seed % (original.height() + 1);
            let col_at = col_seed % (original.width() + 1);

            let mut grid = original.clone();
            grid.insert_row(row_at, fill).unwrap();
            grid.insert_col(col_at, fill).unwrap();
            prop_assert_eq!(grid.height(), original.height() + 1);
            prop_assert_eq!(grid.width(), original.width() + 1);

            for c in grid.coords() {
                if c.y == row_at || c.x == col_at {
                    prop_assert_eq!(grid[c], fill);
                } else {
                    let x = if c.x > col_at { c.x - 1 } else { c.x };
                    let y = if c.y > row_at { c.y - 1 } else { c.y };
                    prop_assert_eq!(grid[c], original[Coord::new(x, y)]);
                }
            }
        }
    }
}
