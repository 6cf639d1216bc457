//! Command-line configuration

use crate::driver::speed::{DEFAULT_SPEED, SPEED_MAX, SPEED_MIN};
use crate::session::source::{DEFAULT_SIZE, SIZE_MAX, SIZE_MIN};
use crate::stepper::Algorithm;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "sortty")]
#[command(about = "Watch sorting algorithms compare, swap and write, one step at a time")]
pub struct Cli {
    /// Algorithm to run: bubble, merge or quick
    #[arg(short, long, default_value = "bubble", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Number of random values to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Animation speed; higher is faster
    #[arg(short, long, default_value_t = DEFAULT_SPEED, value_parser = clap::value_parser!(u32).range(SPEED_MIN as i64..=SPEED_MAX as i64))]
    pub speed: u32,

    /// Start from these comma-separated values instead of random ones
    #[arg(long)]
    pub values: Option<String>,

    /// Seed for random generation (reproducible arrays)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run without the terminal UI, printing one line per step
    #[arg(long)]
    pub headless: bool,

    /// With --headless: skip the animation and print only the result
    #[arg(long, requires = "headless")]
    pub instant: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (SIZE_MIN..=SIZE_MAX).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be in {}..={}", SIZE_MIN, SIZE_MAX))
    }
}
