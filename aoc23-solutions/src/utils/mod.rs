//! Shared building blocks for the puzzle solutions

pub mod bfs;
pub mod grid;
