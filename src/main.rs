// sortty: step-by-step sorting visualizer for the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sortty::config::Cli;
use sortty::driver::Speed;
use sortty::headless::{self, Pacing, TextRenderer};
use sortty::session::{parse_sequence, random_sequence, Session};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing_to_file(path)?;
    } else if cli.headless {
        init_tracing_to_stderr();
    }

    let speed = Speed::new(cli.speed)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Custom values are validated before anything is sorted
    let sequence = match &cli.values {
        Some(text) => match parse_sequence(text) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => random_sequence(cli.size, &mut rng),
    };

    if cli.headless {
        let pacing = if cli.instant {
            Pacing::Instant
        } else {
            Pacing::Paced(speed)
        };
        let mut text = TextRenderer::new(io::stdout().lock());
        let (sorted, stats) = headless::run(cli.algorithm, sequence, pacing, &mut text)?;
        drop(text.finish()?);
        info!(len = sorted.len(), steps = stats.steps, "headless run finished");
        eprintln!(
            "{}: {} steps ({} compares, {} swaps, {} pivots, {} writes)",
            cli.algorithm, stats.steps, stats.comparisons, stats.swaps, stats.pivots, stats.writes
        );
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let session = Session::new(sequence, speed);
    let mut app = App::new(session, cli.algorithm, cli.size, rng);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "terminal UI failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_tracing_to_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_tracing_to_file(log_path: &Path) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
