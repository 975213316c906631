//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First year of Advent of Code
pub const FIRST_YEAR: u16 = 2015;
/// Days per event
pub const DAYS_PER_YEAR: u8 = 25;

fn check_puzzle(year: u16, day: u8) -> Result<(), RegistrationError> {
    if year < FIRST_YEAR || !(1..=DAYS_PER_YEAR).contains(&day) {
        return Err(RegistrationError::InvalidPuzzle { year, day });
    }
    Ok(())
}

/// Creates a solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct SolverEntry {
    info: SolverInfo,
    factory: SolverFactory,
}

/// Builder for a [`SolverRegistry`].
///
/// Rejects duplicate and impossible (year, day) registrations.
///
/// # Example
///
/// ```no_run
/// # use aoc23_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
#[derive(Default)]
pub struct SolverRegistryBuilder {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register solver type `S` for a specific year and day.
    pub fn register<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let info = SolverInfo {
            year,
            day,
            parts: S::PARTS,
            tags,
        };
        self.register_factory(info, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    /// Register a hand-written factory.
    ///
    /// # Errors
    /// * [`RegistrationError::InvalidPuzzle`] - year before 2015 or day outside 1..=25
    /// * [`RegistrationError::Duplicate`] - this year and day already has a solver
    pub fn register_factory<F>(mut self, info: SolverInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let (year, day) = (info.year, info.day);
        check_puzzle(year, day)?;
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate { year, day });
        }

        log::debug!("registered solver for {year}/{day:02} ({} parts)", info.parts);
        self.entries.insert(
            (year, day),
            SolverEntry {
                info,
                factory: Box::new(factory),
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc23_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable lookup from (year, day) to solver factories, ordered by
/// (year, day).
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound { year, day })?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }

    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.values().map(|entry| entry.info)
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|entry| entry.info)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased handle that lets plugins of different solver types live in
/// one `inventory` collection.
///
/// Every [`Solver`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// `#[derive(AutoRegisterSolver)]` generates the submission; by hand it
/// looks like this:
///
/// ```no_run
/// use aoc23_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc23_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering, e.g. "2023" or "grid"
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
