//! Cooperative pacing of a stepper
//!
//! The [`Driver`] owns the active [`Stepper`] and resumes it at most once per
//! [`Driver::poll`], only when the previous step's delay has elapsed. Every
//! snapshot is forwarded to a [`Renderer`]; on completion a final all-finalized
//! frame is rendered and the driver stops.
//!
//! There are no threads here. The UI event loop calls `poll` between input
//! events; the headless runner uses [`Driver::run_paced`], which sleeps on the
//! current thread between steps.

pub mod speed;

use crate::highlight::{uniform_roles, Role};
use crate::stepper::{SortError, Step, StepKind, Stepper};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub use speed::{map_speed_to_delay, Speed};

/// Receives every snapshot the driver produces
pub trait Renderer {
    fn render(&mut self, values: &[i64], roles: &[Role]);
}

impl<F> Renderer for F
where
    F: FnMut(&[i64], &[Role]),
{
    fn render(&mut self, values: &[i64], roles: &[Role]) {
        self(values, roles)
    }
}

/// Outcome of a single [`Driver::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The next step is not due yet
    Pending,
    /// One snapshot was produced and rendered
    Stepped(StepKind),
    /// The stepper completed; the final frame has been rendered
    Finished,
}

#[derive(Debug)]
pub struct Driver {
    stepper: Stepper,
    next_due: Instant,
    finished: bool,
}

impl Driver {
    /// Wrap `stepper`; the first resume is due at `now`
    pub fn new(stepper: Stepper, now: Instant) -> Self {
        Driver {
            stepper,
            next_due: now,
            finished: false,
        }
    }

    /// Resume the stepper once if it is due.
    ///
    /// `delay` is read at every call, so a speed change applies from the next
    /// scheduled step on.
    pub fn poll<R>(&mut self, now: Instant, delay: Duration, renderer: &mut R) -> Result<Tick, SortError>
    where
        R: Renderer + ?Sized,
    {
        if self.finished {
            return Ok(Tick::Finished);
        }
        if now < self.next_due {
            return Ok(Tick::Pending);
        }

        match self.stepper.resume()? {
            Step::Snapshot(snapshot) => {
                renderer.render(&snapshot.values, &snapshot.roles);
                self.next_due = now + delay;
                debug!(
                    algorithm = %self.stepper.algorithm(),
                    kind = ?snapshot.kind,
                    delay_ms = delay.as_millis() as u64,
                    "step"
                );
                Ok(Tick::Stepped(snapshot.kind))
            }
            Step::Completed => {
                self.complete(renderer);
                Ok(Tick::Finished)
            }
        }
    }

    /// Time left until the next resume is due
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Run to completion on the current thread, sleeping between steps.
    /// `delay_source` is consulted before every step.
    pub fn run_paced<D, R>(&mut self, mut delay_source: D, renderer: &mut R) -> Result<(), SortError>
    where
        D: FnMut() -> Duration,
        R: Renderer + ?Sized,
    {
        loop {
            match self.poll(Instant::now(), delay_source(), renderer)? {
                Tick::Finished => return Ok(()),
                Tick::Pending => thread::sleep(self.until_due(Instant::now())),
                Tick::Stepped(_) => {}
            }
        }
    }

    /// Complete the run without pacing. Intermediate snapshots are dropped;
    /// only the final frame is rendered.
    pub fn finish<R>(&mut self, renderer: &mut R) -> Result<(), SortError>
    where
        R: Renderer + ?Sized,
    {
        if self.finished {
            return Ok(());
        }
        while let Step::Snapshot(_) = self.stepper.resume()? {}
        self.complete(renderer);
        Ok(())
    }

    fn complete<R>(&mut self, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let values = self.stepper.values();
        renderer.render(values, &uniform_roles(values.len(), Role::Finalized));
        self.finished = true;

        let stats = self.stepper.stats();
        info!(
            algorithm = %self.stepper.algorithm(),
            len = values.len(),
            steps = stats.steps,
            swaps = stats.swaps,
            writes = stats.writes,
            "run completed"
        );
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    /// Release the stepper (finished or not)
    pub fn into_stepper(self) -> Stepper {
        self.stepper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::Algorithm;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Vec<i64>, Vec<Role>)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, values: &[i64], roles: &[Role]) {
            self.frames.push((values.to_vec(), roles.to_vec()));
        }
    }

    #[test]
    fn poll_waits_for_the_delay() {
        let start = Instant::now();
        let mut driver = Driver::new(Stepper::new(Algorithm::Bubble, vec![2, 1]), start);
        let mut recorder = Recorder::default();
        let delay = Duration::from_millis(50);

        assert_eq!(
            driver.poll(start, delay, &mut recorder).unwrap(),
            Tick::Stepped(StepKind::Compare)
        );
        assert_eq!(
            driver.poll(start + Duration::from_millis(10), delay, &mut recorder).unwrap(),
            Tick::Pending
        );
        assert_eq!(driver.until_due(start + Duration::from_millis(10)), Duration::from_millis(40));
        assert_eq!(
            driver.poll(start + delay, delay, &mut recorder).unwrap(),
            Tick::Stepped(StepKind::Swap)
        );
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn new_delay_applies_to_the_next_step() {
        let start = Instant::now();
        let mut driver = Driver::new(Stepper::new(Algorithm::Bubble, vec![3, 2, 1]), start);
        let mut recorder = Recorder::default();

        driver.poll(start, Duration::from_millis(100), &mut recorder).unwrap();
        let second = start + Duration::from_millis(100);
        driver.poll(second, Duration::from_millis(5), &mut recorder).unwrap();
        assert_eq!(driver.until_due(second), Duration::from_millis(5));
    }

    #[test]
    fn completion_renders_all_finalized() {
        let start = Instant::now();
        let mut driver = Driver::new(Stepper::new(Algorithm::Quick, vec![4, 1, 3]), start);
        let mut recorder = Recorder::default();

        let mut now = start;
        loop {
            match driver.poll(now, Duration::ZERO, &mut recorder).unwrap() {
                Tick::Finished => break,
                Tick::Pending => panic!("zero delay should never be pending"),
                Tick::Stepped(_) => now += Duration::from_millis(1),
            }
        }

        let (values, roles) = recorder.frames.last().unwrap();
        assert_eq!(values, &vec![1, 3, 4]);
        assert!(roles.iter().all(|r| *r == Role::Finalized));
        assert!(driver.is_finished());
        assert_eq!(driver.poll(now, Duration::ZERO, &mut recorder).unwrap(), Tick::Finished);
    }

    #[test]
    fn finish_matches_paced_result() {
        for algorithm in Algorithm::ALL {
            let input = vec![9, -2, 7, 7, 0, 15, 3, -2];

            let mut paced = Driver::new(Stepper::new(algorithm, input.clone()), Instant::now());
            let mut paced_frames = Recorder::default();
            paced.run_paced(|| Duration::ZERO, &mut paced_frames).unwrap();

            let mut instant = Driver::new(Stepper::new(algorithm, input.clone()), Instant::now());
            let mut instant_frames = Recorder::default();
            instant.finish(&mut instant_frames).unwrap();

            assert_eq!(instant_frames.frames.len(), 1);
            assert_eq!(
                paced.into_stepper().into_sequence(),
                instant.into_stepper().into_sequence()
            );
            assert!(paced_frames.frames.len() > 1);
        }
    }

    #[test]
    fn closures_can_render() {
        let mut count = 0usize;
        let mut render = |_values: &[i64], _roles: &[Role]| count += 1;
        let mut driver = Driver::new(Stepper::new(Algorithm::Merge, vec![2, 1]), Instant::now());
        driver.finish(&mut render).unwrap();
        assert_eq!(count, 1);
    }
}
