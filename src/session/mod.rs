//! Session controller: the current sequence and the (single) active run
//!
//! The session is either idle, holding the sequence, or sorting, in which case
//! the sequence has been moved into the driver's stepper. Requests that would
//! replace or restart the sequence are refused while sorting, so there is never
//! more than one stepper and nothing else writes to the sequence mid-run.

pub mod source;

use crate::driver::{Driver, Renderer, Speed, Tick};
use crate::highlight::{uniform_roles, Role};
use crate::stepper::{Algorithm, SortError, StepStats, Stepper};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::mem;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

pub use source::{parse_sequence, random_sequence, ParseError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a sort is already running")]
    Busy,

    #[error("no sort is running")]
    NotSorting,

    #[error("generate or enter an array first")]
    EmptySequence,

    #[error("array size {size} is out of range ({min}..={max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error(transparent)]
    InvalidInput(#[from] ParseError),

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Summary of the most recent completed run of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub len: usize,
    pub stats: StepStats,
}

#[derive(Debug)]
enum SessionState {
    Idle { sequence: Vec<i64> },
    Sorting { driver: Driver },
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
    speed: Speed,
    last_runs: FxHashMap<Algorithm, RunSummary>,
}

impl Session {
    pub fn new(sequence: Vec<i64>, speed: Speed) -> Self {
        Session {
            state: SessionState::Idle { sequence },
            speed,
            last_runs: FxHashMap::default(),
        }
    }

    pub fn is_sorting(&self) -> bool {
        matches!(self.state, SessionState::Sorting { .. })
    }

    /// Current values, wherever they live right now
    pub fn values(&self) -> &[i64] {
        match &self.state {
            SessionState::Idle { sequence } => sequence,
            SessionState::Sorting { driver } => driver.stepper().values(),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Speed may change at any time; a running sort picks it up on its next step
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn active_algorithm(&self) -> Option<Algorithm> {
        match &self.state {
            SessionState::Sorting { driver } => Some(driver.stepper().algorithm()),
            SessionState::Idle { .. } => None,
        }
    }

    pub fn active_stats(&self) -> Option<StepStats> {
        match &self.state {
            SessionState::Sorting { driver } => Some(driver.stepper().stats()),
            SessionState::Idle { .. } => None,
        }
    }

    pub fn last_run(&self, algorithm: Algorithm) -> Option<&RunSummary> {
        self.last_runs.get(&algorithm)
    }

    /// Time until the running sort wants its next step
    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        match &self.state {
            SessionState::Sorting { driver } => Some(driver.until_due(now)),
            SessionState::Idle { .. } => None,
        }
    }

    /// Replace the sequence with `size` random values
    pub fn generate<G, R>(&mut self, size: usize, rng: &mut G, renderer: &mut R) -> Result<(), SessionError>
    where
        G: Rng + ?Sized,
        R: Renderer + ?Sized,
    {
        let sequence = self.idle_sequence_mut("generate")?;
        if !(source::SIZE_MIN..=source::SIZE_MAX).contains(&size) {
            return Err(SessionError::SizeOutOfRange {
                size,
                min: source::SIZE_MIN,
                max: source::SIZE_MAX,
            });
        }
        *sequence = random_sequence(size, rng);
        info!(size, "generated sequence");
        self.redraw(renderer);
        Ok(())
    }

    /// Replace the sequence with parsed custom input. On a parse error the
    /// current sequence is kept.
    pub fn use_custom<R>(&mut self, text: &str, renderer: &mut R) -> Result<(), SessionError>
    where
        R: Renderer + ?Sized,
    {
        let sequence = self.idle_sequence_mut("use custom input")?;
        let parsed = parse_sequence(text)?;
        info!(len = parsed.len(), "using custom sequence");
        *sequence = parsed;
        self.redraw(renderer);
        Ok(())
    }

    /// Redraw the current sequence with default roles. Does not restart or
    /// resume anything.
    pub fn reset<R>(&mut self, renderer: &mut R) -> Result<(), SessionError>
    where
        R: Renderer + ?Sized,
    {
        self.idle_sequence_mut("reset")?;
        self.redraw(renderer);
        Ok(())
    }

    /// Hand the sequence to a new stepper and start pacing it
    pub fn start(&mut self, algorithm: Algorithm, now: Instant) -> Result<(), SessionError> {
        let sequence = self.idle_sequence_mut("start")?;
        if sequence.is_empty() {
            return Err(SessionError::EmptySequence);
        }

        let sequence = mem::take(sequence);
        info!(%algorithm, len = sequence.len(), speed = self.speed.value(), "starting sort");
        let stepper = Stepper::new(algorithm, sequence);
        self.state = SessionState::Sorting {
            driver: Driver::new(stepper, now),
        };
        Ok(())
    }

    /// Advance the running sort if its next step is due. Idle sessions report
    /// [`Tick::Pending`].
    pub fn tick<R>(&mut self, now: Instant, renderer: &mut R) -> Result<Tick, SessionError>
    where
        R: Renderer + ?Sized,
    {
        let SessionState::Sorting { driver } = &mut self.state else {
            return Ok(Tick::Pending);
        };
        let tick = driver.poll(now, self.speed.delay(), renderer)?;
        if tick == Tick::Finished {
            self.end_run();
        }
        Ok(tick)
    }

    /// Complete the running sort immediately, rendering only the final frame
    pub fn finish_now<R>(&mut self, renderer: &mut R) -> Result<(), SessionError>
    where
        R: Renderer + ?Sized,
    {
        let SessionState::Sorting { driver } = &mut self.state else {
            return Err(SessionError::NotSorting);
        };
        driver.finish(renderer)?;
        self.end_run();
        Ok(())
    }

    /// Drop the running stepper where it stands. The partially sorted
    /// sequence is kept and redrawn with default roles.
    pub fn cancel<R>(&mut self, renderer: &mut R) -> Result<(), SessionError>
    where
        R: Renderer + ?Sized,
    {
        if !self.is_sorting() {
            return Err(SessionError::NotSorting);
        }
        let state = mem::replace(&mut self.state, SessionState::Idle { sequence: Vec::new() });
        if let SessionState::Sorting { driver } = state {
            let stepper = driver.into_stepper();
            info!(
                algorithm = %stepper.algorithm(),
                steps = stepper.stats().steps,
                "sort cancelled"
            );
            self.state = SessionState::Idle {
                sequence: stepper.into_sequence(),
            };
        }
        self.redraw(renderer);
        Ok(())
    }

    fn end_run(&mut self) {
        let state = mem::replace(&mut self.state, SessionState::Idle { sequence: Vec::new() });
        match state {
            SessionState::Sorting { driver } => {
                let stepper = driver.into_stepper();
                let summary = RunSummary {
                    algorithm: stepper.algorithm(),
                    len: stepper.values().len(),
                    stats: stepper.stats(),
                };
                self.last_runs.insert(summary.algorithm, summary);
                self.state = SessionState::Idle {
                    sequence: stepper.into_sequence(),
                };
            }
            idle => self.state = idle,
        }
    }

    fn idle_sequence_mut(&mut self, action: &str) -> Result<&mut Vec<i64>, SessionError> {
        match &mut self.state {
            SessionState::Idle { sequence } => Ok(sequence),
            SessionState::Sorting { .. } => {
                warn!(action, "rejected while a sort is running");
                Err(SessionError::Busy)
            }
        }
    }

    fn redraw<R>(&self, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let values = self.values();
        renderer.render(values, &uniform_roles(values.len(), Role::Default));
    }
}
