//! 2023 day 10: the pipe maze
//!
//! Part 1 walks the loop through the start tile and reports the farthest
//! point from the start; part 2 counts the tiles the loop encloses.

mod maze;
mod tile;

pub use maze::{Maze, MazeError};
pub use tile::{Pipe, Quadrants, Tile, UnknownTile};

use anyhow::Context;
use aoc23_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc23_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["2023", "grid", "bfs"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse::<Maze>()
            .context("failed to read pipe maze")
            .map_err(|e| ParseError::Input(e.into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.furthest().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.enclosed().to_string())
    }
}
