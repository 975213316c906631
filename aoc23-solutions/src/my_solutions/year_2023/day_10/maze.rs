use std::collections::HashMap;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use super::tile::{Pipe, Quadrants, Tile, UnknownTile};
use crate::utils::bfs;
use crate::utils::grid::{Coord, Direction, Grid, GridError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unrecognised tile {tile:?} at {coord}")]
    UnknownTile { tile: char, coord: Coord },
    #[error("maze has no start tile")]
    MissingStart,
    #[error("second start tile at {second}, first one at {first}")]
    MultipleStarts { first: Coord, second: Coord },
    #[error("start tile must connect to exactly two neighbours, found {found}")]
    StartConnections { found: usize },
}

/// A field of pipes holding one closed loop through the start tile.
///
/// Construction runs every stage up front (shape check, tile
/// classification, locating the start, deducing its shape, tracing the
/// loop), so a `Maze` value is always ready to answer queries.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid<Tile>,
    start: Coord,
    start_shape: Pipe,
    /// BFS distance from the start for every tile on the loop
    loop_distances: HashMap<Coord, usize>,
}

impl Maze {
    pub fn parse<I, S>(lines: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chars = Grid::from_lines(lines)?;
        debug!("maze is {}x{}", chars.width(), chars.height());

        let mut grid = chars.try_map(|coord, c| {
            Tile::try_from(c).map_err(|UnknownTile(tile)| MazeError::UnknownTile { tile, coord })
        })?;

        let start = locate_start(&grid)?;
        let start_shape = deduce_start_shape(&grid, start)?;
        debug!("start at {start} is a {:?} pipe", start_shape);
        grid[start] = Tile::Pipe(start_shape);

        let loop_distances = bfs::distances(start, |pos| linked(&grid, pos));
        debug!("loop holds {} tiles", loop_distances.len());

        Ok(Self {
            grid,
            start,
            start_shape,
            loop_distances,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    /// The pipe hidden under the start tile.
    pub fn start_shape(&self) -> Pipe {
        self.start_shape
    }

    pub fn tile(&self, pos: Coord) -> Result<Tile, MazeError> {
        Ok(*self.grid.at(pos)?)
    }

    /// Whether the tile at `pos` opens toward `direction`.
    pub fn connects_to(&self, pos: Coord, direction: Direction) -> Result<bool, MazeError> {
        Ok(self.grid.at(pos)?.connects(direction))
    }

    /// Whether the tile at `src` opens toward the neighbouring tile `dst`.
    ///
    /// # Errors
    /// [`GridError::NotAdjacent`] unless `dst` is one cardinal step from `src`.
    pub fn connects_to_coord(&self, src: Coord, dst: Coord) -> Result<bool, MazeError> {
        let direction = Direction::between(src, dst)?;
        self.connects_to(src, direction)
    }

    /// Whether `src` and `dst` open toward each other.
    pub fn is_adjacent(&self, src: Coord, dst: Coord) -> Result<bool, MazeError> {
        Ok(self.connects_to_coord(src, dst)? && self.connects_to_coord(dst, src)?)
    }

    /// Tiles mutually connected to `pos`, in north, east, south, west order.
    pub fn adjacent(&self, pos: Coord) -> Result<Vec<Coord>, MazeError> {
        if !self.grid.contains(pos) {
            return Err(GridError::NotContained(pos).into());
        }
        Ok(linked(&self.grid, pos))
    }

    /// Every tile on the loop through the start.
    pub fn loop_tiles(&self) -> impl Iterator<Item = Coord> {
        self.loop_distances.keys().copied()
    }

    pub fn on_loop(&self, pos: Coord) -> bool {
        self.loop_distances.contains_key(&pos)
    }

    /// Steps from the start along the loop, for tiles on the loop.
    pub fn distance(&self, pos: Coord) -> Option<usize> {
        self.loop_distances.get(&pos).copied()
    }

    /// Steps to the loop tile farthest from the start.
    pub fn furthest(&self) -> usize {
        self.loop_distances.values().copied().max().unwrap_or(0)
    }

    /// Number of tiles enclosed by the loop.
    ///
    /// Each row is scanned left to right, tracking which side of the loop
    /// every quarter of a cell falls on (see [`Quadrants`]). The leftmost
    /// cell starts outside; the loop never leaves the grid, so no
    /// correction at the right edge is needed.
    pub fn enclosed(&self) -> usize {
        let mut count = 0;
        for (y, row) in self.grid.rows().enumerate() {
            let mut inside = false;
            for (x, tile) in row.iter().enumerate() {
                let pipe = tile.pipe().filter(|_| self.on_loop(Coord::new(x, y)));
                let quadrants = Quadrants::scan(inside, pipe);
                if quadrants.is_inside() {
                    count += 1;
                }
                inside = quadrants.top_right;
            }
        }
        count
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

fn locate_start(grid: &Grid<Tile>) -> Result<Coord, MazeError> {
    let mut starts = grid.positions(|&tile| tile == Tile::Start);
    let first = starts.next().ok_or(MazeError::MissingStart)?;
    match starts.next() {
        Some(second) => Err(MazeError::MultipleStarts { first, second }),
        None => Ok(first),
    }
}

/// The start's shape follows from which of its neighbours open back toward
/// it; there must be exactly two.
fn deduce_start_shape(grid: &Grid<Tile>, start: Coord) -> Result<Pipe, MazeError> {
    let live: Vec<Direction> = grid
        .neighbors(start)
        .filter(|&(dir, next)| grid[next].connects(dir.opposite()))
        .map(|(dir, _)| dir)
        .collect();

    match *live.as_slice() {
        [a, b] => Pipe::from_directions(a, b).ok_or(MazeError::StartConnections { found: 2 }),
        _ => Err(MazeError::StartConnections { found: live.len() }),
    }
}

/// Neighbours of `pos` that `pos` opens toward and that open back.
fn linked(grid: &Grid<Tile>, pos: Coord) -> Vec<Coord> {
    let tile = grid[pos];
    grid.neighbors(pos)
        .filter(|&(dir, next)| tile.connects(dir) && grid[next].connects(dir.opposite()))
        .map(|(_, next)| next)
        .collect()
}
