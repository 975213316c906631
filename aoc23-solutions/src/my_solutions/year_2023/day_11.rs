//! 2023 day 11: distances between galaxies in an expanding universe

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use aoc23_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc23_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::utils::grid::{Coord, Grid, GridError};

const GALAXY: char = '#';
const SPACE: char = '.';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["2023", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalaxyError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unexpected cell {cell:?} at {coord}")]
    UnknownCell { cell: char, coord: Coord },
}

/// An image of space with galaxies (`#`) and empty space (`.`).
///
/// Rows and columns without a galaxy grow by the expansion factor when
/// measuring distances. The image itself is never resized; the empty lines
/// are indexed once at construction and distances are inflated on the fly.
#[derive(Debug, Clone)]
pub struct GalaxyMap {
    grid: Grid<char>,
    galaxies: Vec<Coord>,
    empty_rows: Vec<usize>,
    empty_cols: Vec<usize>,
    expansion_factor: usize,
}

impl GalaxyMap {
    pub fn parse<I, S>(lines: I) -> Result<Self, GalaxyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grid = Grid::from_lines(lines)?.try_map(|coord, cell| match cell {
            GALAXY | SPACE => Ok(cell),
            cell => Err(GalaxyError::UnknownCell { cell, coord }),
        })?;

        let galaxies: Vec<Coord> = grid.positions(|&cell| cell == GALAXY).collect();
        let empty_rows = (0..grid.height())
            .filter(|&y| galaxies.iter().all(|g| g.y != y))
            .collect::<Vec<_>>();
        let empty_cols = (0..grid.width())
            .filter(|&x| galaxies.iter().all(|g| g.x != x))
            .collect::<Vec<_>>();
        debug!(
            "{} galaxies, empty rows {:?}, empty cols {:?}",
            galaxies.len(),
            empty_rows,
            empty_cols
        );

        Ok(Self {
            grid,
            galaxies,
            empty_rows,
            empty_cols,
            expansion_factor: 1,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Galaxy positions in row-major order.
    pub fn galaxies(&self) -> &[Coord] {
        &self.galaxies
    }

    /// Indices of rows without a galaxy, ascending.
    pub fn empty_rows(&self) -> &[usize] {
        &self.empty_rows
    }

    /// Indices of columns without a galaxy, ascending.
    pub fn empty_cols(&self) -> &[usize] {
        &self.empty_cols
    }

    pub fn expansion_factor(&self) -> usize {
        self.expansion_factor
    }

    /// How many lines each empty row or column counts for.
    ///
    /// Factors 0, 1 and 2 all double an empty line; see DESIGN.md.
    pub fn set_expansion_factor(&mut self, factor: usize) {
        self.expansion_factor = factor;
    }

    /// Manhattan distance between two positions after expansion.
    pub fn min_distance(&self, from: Coord, to: Coord) -> usize {
        let crossed = crossed(&self.empty_rows, from.y, to.y)
            + crossed(&self.empty_cols, from.x, to.x);
        self.grid.manhattan_distance(from, to) + crossed * self.extra_per_line()
    }

    /// Every unordered pair of distinct galaxies, once.
    pub fn galaxy_pairs(&self) -> impl Iterator<Item = (Coord, Coord)> {
        self.galaxies.iter().copied().tuple_combinations()
    }

    pub fn sum_of_distances(&self) -> usize {
        self.galaxy_pairs()
            .map(|(from, to)| self.min_distance(from, to))
            .sum()
    }

    fn extra_per_line(&self) -> usize {
        self.expansion_factor.max(2) - 1
    }
}

/// Number of `lines` strictly between `a` and `b`. `lines` must be sorted.
fn crossed(lines: &[usize], a: usize, b: usize) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let below_hi = lines.partition_point(|&line| line < hi);
    let up_to_lo = lines.partition_point(|&line| line <= lo);
    below_hi.saturating_sub(up_to_lo)
}

impl FromStr for GalaxyMap {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

impl fmt::Display for GalaxyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = GalaxyMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse::<GalaxyMap>()
            .context("failed to read galaxy image")
            .map_err(|e| ParseError::Input(e.into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.set_expansion_factor(2);
        Ok(shared.sum_of_distances().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.set_expansion_factor(1_000_000);
        Ok(shared.sum_of_distances().to_string())
    }
}
