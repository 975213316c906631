//! Advent of Code 2023 grid puzzles with automatic registration
//!
//! [`utils`] holds the shared grid and breadth-first search building blocks.
//! The solutions under `my_solutions` register themselves with the solver
//! framework through the `AutoRegisterSolver` derive macro.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
