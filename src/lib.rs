//! # Introduction
//!
//! sortty animates comparison sorts in the terminal. Each algorithm runs as a
//! resumable state machine that pauses after every comparison, swap, pivot
//! choice or write, and a cooperative driver replays those pauses at a
//! user-controlled pace through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Sequence → Stepper → Snapshots → Driver (paced) → Renderer (TUI / text)
//! ```
//!
//! 1. [`highlight`] — the role each bar plays in a snapshot.
//! 2. [`stepper`] — bubble, merge and quick sort as step machines; one
//!    `resume()` yields one [`stepper::Snapshot`].
//! 3. [`driver`] — single-threaded pacing, speed-to-delay mapping and the
//!    [`driver::Renderer`] seam.
//! 4. [`session`] — owns the sequence and the one active run; random and
//!    custom sequences.
//! 5. [`ui`] — ratatui-based TUI; [`headless`] — plain-text output.
//! 6. [`config`] — command-line options.

pub mod config;
pub mod driver;
pub mod headless;
pub mod highlight;
pub mod session;
pub mod stepper;
pub mod ui;
