//! aoc23 - runs the registered Advent of Code solvers over local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// links the solver plugins
use aoc23_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc23_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    log::debug!("{config:?}");

    let registry = build_registry(&config.tags)?;
    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing_inputs = executor.missing_inputs(&work_items);
    if !missing_inputs.is_empty() {
        println!(
            "Missing {} input file(s) under {}:",
            missing_inputs.len(),
            config.input_dir.display()
        );
        for (year, day) in &missing_inputs {
            println!("  - {year}/day{day:02}.txt");
        }
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Run the executor on its own thread, printing results in order as they arrive
fn run_executor(executor: Executor, work_items: &[WorkItem], quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        log::warn!("not all expected results were received");
    }

    let outcome = executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?;

    formatter.print_summary(&results);

    // failed parts were already printed; only report errors beyond inputs
    outcome.or_else(|e| {
        if only_input_errors(&e) {
            Ok(())
        } else {
            Err(CliError::Executor(e))
        }
    })
}

fn only_input_errors(err: &error::ArcExecutorError) -> bool {
    match err.inner() {
        error::ExecutorError::Input { .. } => true,
        error::ExecutorError::Multiple(errors) => errors.iter().all(only_input_errors),
        _ => false,
    }
}

/// Registry of plugins carrying every tag in `tags`
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
