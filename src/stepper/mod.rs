//! Step-by-step sorting state machines
//!
//! A [`Stepper`] runs one sorting algorithm over one sequence and pauses after
//! every visually meaningful event. Each call to [`Stepper::resume`] advances
//! the algorithm to its next suspension point and returns exactly one
//! [`Snapshot`], or [`Step::Completed`] once the algorithm has finished.
//!
//! - [`bubble`]: nested-loop bubble sort
//! - [`merge`]: top-down merge sort over an explicit frame stack
//! - [`quick`]: iterative quicksort (Lomuto partition) over a range stack
//! - [`errors`]: lifecycle misuse errors
//!
//! # Ownership
//!
//! The stepper takes the sequence by value for the duration of a run and gives
//! it back through [`Stepper::into_sequence`]. Nothing else can write to the
//! sequence while a run is in progress, and the sequence is only mutated
//! inside `resume()`.

pub mod bubble;
pub mod errors;
pub mod merge;
pub mod quick;

use crate::highlight::{Role, RoleAssignment};
use std::fmt;
use std::str::FromStr;

pub use errors::SortError;

/// Which sorting algorithm a stepper runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick];

    /// Cycle to the next algorithm (Bubble -> Merge -> Quick -> Bubble)
    pub fn next(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Bubble,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let stem = lowered
            .strip_suffix("sort")
            .map(|rest| rest.trim_end_matches(['-', '_', ' ']))
            .unwrap_or(lowered.as_str());
        match stem {
            "bubble" => Ok(Algorithm::Bubble),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// What kind of event a snapshot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Two elements (or an element and the pivot) are being compared
    Compare,
    /// Two elements were just exchanged
    Swap,
    /// A new pivot was chosen for a range
    Pivot,
    /// An element is about to be written during a merge
    Write,
    /// One element or a merged range reached its sorted position
    Finalize,
}

/// One paused instant of the algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub kind: StepKind,
    /// Copy of the sequence at the moment of suspension
    pub values: Vec<i64>,
    pub roles: RoleAssignment,
}

/// Result of a single `resume()` call
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Snapshot(Snapshot),
    Completed,
}

/// Lifecycle of a stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, never resumed
    Idle,
    /// Paused at a suspension point
    Suspended,
    /// Finished; further resumes are an error
    Completed,
}

/// Running counters over the snapshots a stepper has emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub pivots: usize,
    pub writes: usize,
    pub finalized: usize,
    /// Peak size of the auxiliary stack (merge frames or quicksort ranges)
    pub max_stack_depth: usize,
}

impl StepStats {
    fn record(&mut self, kind: StepKind) {
        self.steps += 1;
        match kind {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Swap => self.swaps += 1,
            StepKind::Pivot => self.pivots += 1,
            StepKind::Write => self.writes += 1,
            StepKind::Finalize => self.finalized += 1,
        }
    }
}

/// What a state machine hands back at a suspension point. The [`Stepper`]
/// pairs it with a copy of the sequence to form a [`Snapshot`].
#[derive(Debug)]
pub(crate) struct Emit {
    pub kind: StepKind,
    pub roles: RoleAssignment,
}

impl Emit {
    pub(crate) fn new<I>(kind: StepKind, n: usize, overrides: I) -> Self
    where
        I: IntoIterator<Item = (usize, Role)>,
    {
        Emit {
            kind,
            roles: crate::highlight::build_roles(n, overrides, Role::Default),
        }
    }
}

#[derive(Debug)]
enum Machine {
    Bubble(bubble::BubbleSort),
    Merge(merge::MergeSort),
    Quick(quick::QuickSort),
}

/// A sorting run bound to one sequence
#[derive(Debug)]
pub struct Stepper {
    algorithm: Algorithm,
    values: Vec<i64>,
    machine: Machine,
    lifecycle: Lifecycle,
    stats: StepStats,
}

impl Stepper {
    /// Bind a new stepper to `sequence`. The sequence is moved in and stays
    /// with the stepper until [`Stepper::into_sequence`].
    pub fn new(algorithm: Algorithm, sequence: Vec<i64>) -> Self {
        let n = sequence.len();
        let machine = match algorithm {
            Algorithm::Bubble => Machine::Bubble(bubble::BubbleSort::new(n)),
            Algorithm::Merge => Machine::Merge(merge::MergeSort::new(n)),
            Algorithm::Quick => Machine::Quick(quick::QuickSort::new(n)),
        };
        Stepper {
            algorithm,
            values: sequence,
            machine,
            lifecycle: Lifecycle::Idle,
            stats: StepStats::default(),
        }
    }

    /// Advance to the next suspension point.
    ///
    /// Returns [`SortError::AlreadyCompleted`] if the stepper already reported
    /// [`Step::Completed`].
    pub fn resume(&mut self) -> Result<Step, SortError> {
        if self.lifecycle == Lifecycle::Completed {
            return Err(SortError::AlreadyCompleted {
                algorithm: self.algorithm,
            });
        }

        let emitted = match &mut self.machine {
            Machine::Bubble(m) => m.advance(&mut self.values),
            Machine::Merge(m) => m.advance(&mut self.values),
            Machine::Quick(m) => m.advance(&mut self.values),
        };
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.stack_depth());

        match emitted {
            Some(Emit { kind, roles }) => {
                self.lifecycle = Lifecycle::Suspended;
                self.stats.record(kind);
                Ok(Step::Snapshot(Snapshot {
                    kind,
                    values: self.values.clone(),
                    roles,
                }))
            }
            None => {
                self.lifecycle = Lifecycle::Completed;
                Ok(Step::Completed)
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_completed(&self) -> bool {
        self.lifecycle == Lifecycle::Completed
    }

    /// Current (possibly partially sorted) values
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn stats(&self) -> StepStats {
        self.stats
    }

    /// Current size of the auxiliary stack
    pub fn stack_depth(&self) -> usize {
        match &self.machine {
            Machine::Bubble(_) => 0,
            Machine::Merge(m) => m.depth(),
            Machine::Quick(m) => m.depth(),
        }
    }

    /// Release the sequence in whatever state the run has reached
    pub fn into_sequence(self) -> Vec<i64> {
        self.values
    }
}
