//! Rectangular grids addressed by [`Coord`]
//!
//! [`Grid`] owns its cells and answers the geometric questions the puzzle
//! solvers ask: containment, cardinal neighbours, Manhattan distance and
//! breadth-first hop counts. Direction-aware adjacency goes through
//! [`Grid::neighbors`], which solvers wrap with their own connectivity rules.

mod coord;
mod direction;
mod error;
#[allow(clippy::module_inception)]
mod grid;

pub use coord::Coord;
pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
