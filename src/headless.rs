//! Plain-text output for running without the terminal UI
//!
//! Each frame becomes one line: the frame number followed by every value,
//! suffixed with its role marker (`?` compared, `~` swapped, `P` pivot,
//! `i` active index, `-` working range, `w` written, `=` final).

use crate::driver::{Driver, Renderer, Speed};
use crate::highlight::Role;
use crate::stepper::{Algorithm, SortError, StepStats, Stepper};
use std::io::{self, Write};
use std::time::Instant;

/// Writes one line per rendered frame. The first I/O error is kept and
/// further output is skipped.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer {
            out,
            frames: 0,
            error: None,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Format one frame as text
pub fn format_frame(values: &[i64], roles: &[Role]) -> String {
    let mut line = String::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        line.push_str(&value.to_string());
        if let Some(marker) = roles.get(idx).copied().unwrap_or_default().marker() {
            line.push(marker);
        }
    }
    line
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, values: &[i64], roles: &[Role]) {
        if self.error.is_some() {
            return;
        }
        self.frames += 1;
        let line = format_frame(values, roles);
        if let Err(e) = writeln!(self.out, "{:>5} | {}", self.frames, line) {
            self.error = Some(e);
        }
    }
}

/// How the headless run paces itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep for the speed's delay between steps, printing every frame
    Paced(Speed),
    /// Run to the end without pausing, printing only the final frame
    Instant,
}

/// Sort `sequence` with `algorithm`, writing frames to `renderer`. Returns the
/// final sequence and the run's counters.
pub fn run<R>(
    algorithm: Algorithm,
    sequence: Vec<i64>,
    pacing: Pacing,
    renderer: &mut R,
) -> Result<(Vec<i64>, StepStats), SortError>
where
    R: Renderer + ?Sized,
{
    let mut driver = Driver::new(Stepper::new(algorithm, sequence), Instant::now());
    match pacing {
        Pacing::Paced(speed) => driver.run_paced(|| speed.delay(), renderer)?,
        Pacing::Instant => driver.finish(renderer)?,
    }
    let stepper = driver.into_stepper();
    let stats = stepper.stats();
    Ok((stepper.into_sequence(), stats))
}
