//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code 2023 grid puzzle runner
#[derive(Parser, Debug)]
#[command(name = "aoc23", about = "Run the registered Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as `{year}/dayDD.txt`
    #[arg(short, long, default_value = "data")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc23"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.day, None);
        assert_eq!(args.part, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, PathBuf::from("data"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from([
            "aoc23",
            "--year",
            "2023",
            "-d",
            "10",
            "-p",
            "2",
            "--tags",
            "grid,bfs",
            "--parallelize-by",
            "part",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.day, Some(10));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, ["grid", "bfs"]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
        assert!(args.quiet);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Args::try_parse_from(["aoc23", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc23", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc23", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc23", "--parallelize-by", "week"]).is_err());
    }
}
