use aoc23_solutions::my_solutions::year_2023::day_11::GalaxyMap;
use aoc23_solver::{SolverError, SolverRegistry, SolverRegistryBuilder};

const MAZE: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

const GALAXIES: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

fn registry() -> SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"2023"))
        .unwrap()
        .build()
}

#[test]
fn test_plugins_registered() {
    let registry = registry();
    let puzzles: Vec<_> = registry
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(puzzles, [(2023, 10, 2), (2023, 11, 2)]);
    assert!(
        registry
            .get_info(2023, 10)
            .is_some_and(|info| info.tags.contains(&"bfs"))
    );
}

#[test]
fn test_solve_through_registry() {
    let registry = registry();

    let mut maze = registry.create_solver(2023, 10, MAZE).unwrap();
    assert_eq!(maze.solve(1).unwrap().answer, "8");

    let mut galaxies = registry.create_solver(2023, 11, GALAXIES).unwrap();
    assert_eq!(galaxies.solve(1).unwrap().answer, "374");
    assert_eq!(galaxies.solve(2).unwrap().answer, "82000210");
}

#[test]
fn test_registry_surfaces_parse_errors() {
    let registry = registry();
    let err = match registry.create_solver(2023, 10, "...\n...\n") {
        Err(e) => e,
        Ok(_) => panic!("a maze without a start must not parse"),
    };
    assert!(matches!(err, SolverError::Parse(_)));
    assert!(err.to_string().contains("pipe maze"));
}

#[test]
fn test_galaxy_map_matches_registered_solver() {
    let mut map: GalaxyMap = GALAXIES.parse().unwrap();
    map.set_expansion_factor(10);
    assert_eq!(map.sum_of_distances(), 1030);
}
