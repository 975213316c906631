//! Advent of Code solver framework
//!
//! Each puzzle is a type implementing [`AocParser`] (input to shared data)
//! and one [`PartSolver<N>`](PartSolver) per part. `#[derive(AocSolver)]`
//! turns those into a [`Solver`], and `#[derive(AutoRegisterSolver)]`
//! submits it as a [`SolverPlugin`] so a [`SolverRegistry`] can find it at
//! runtime without a central list.
//!
//! # Example
//!
//! ```
//! use aoc23_solver::{AocParser, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//! use aoc23_solver::AocSolver;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Sums>(2023, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, RegisterableSolver, SolverFactory, SolverInfo, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// used by the code `AutoRegisterSolver` generates
pub use inventory;

pub use aoc23_solver_macros::{AocSolver, AutoRegisterSolver};
