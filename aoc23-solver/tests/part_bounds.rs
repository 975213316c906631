//! Part bounds checking in `SolverExt` and `DynSolver`

use aoc23_solver::{AocParser, ParseError, SolveError, Solver, SolverExt, SolverInstance, DynSolver};
use proptest::prelude::*;

/// Answers every part it is asked for
struct AnyPart<const N: u8>;

impl<const N: u8> AocParser for AnyPart<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for AnyPart<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => AnyPart::<1>::solve_part_checked_range(&mut (), part),
        2 => AnyPart::<2>::solve_part_checked_range(&mut (), part),
        25 => AnyPart::<25>::solve_part_checked_range(&mut (), part),
        _ => unreachable!("only 1, 2 and 25 are generated"),
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_rejected(max_parts in prop_oneof![Just(1u8), Just(2), Just(25)], part in any::<u8>()) {
        let result = checked(max_parts, part);
        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    #[test]
    fn prop_in_range_delegates(part in 1u8..=2) {
        let checked = AnyPart::<2>::solve_part_checked_range(&mut (), part).unwrap();
        let direct = AnyPart::<2>::solve_part(&mut (), part).unwrap();
        prop_assert_eq!(checked, direct);
    }
}

#[test]
fn test_instance_checks_range() {
    let mut instance = SolverInstance::<AnyPart<2>>::new(2023, 10, "").unwrap();
    assert_eq!(instance.parts(), 2);
    assert_eq!(instance.solve(2).unwrap().answer, "part2");
    assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
    assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_solve_result_duration_is_ordered() {
    let mut instance = SolverInstance::<AnyPart<1>>::new(2023, 11, "").unwrap();
    let result = instance.solve(1).unwrap();
    assert!(result.solve_end >= result.solve_start);
    assert_eq!(result.duration(), result.solve_end - result.solve_start);
}
