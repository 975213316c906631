//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A domain parser rejected the input
    #[error("Invalid input: {0}")]
    Input(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds max_parts)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {year} day {day}")]
    NotFound { year: u16, day: u8 },
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Year before the first event, or day outside 1..=25
    #[error("No puzzle exists for year {year} day {day}")]
    InvalidPuzzle { year: u16, day: u8 },
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {year} day {day}")]
    Duplicate { year: u16, day: u8 },
}
