//! Main TUI application state and logic

use crate::driver::{Renderer, Speed, Tick};
use crate::highlight::Role;
use crate::session::source::{SIZE_MAX, SIZE_MIN};
use crate::session::{Session, SessionError};
use crate::stepper::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Upper bound on how long the loop blocks waiting for input
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Size change per `+`/`-` press
const SIZE_STEP: usize = 5;

/// Speed change per arrow press
const SPEED_STEP: u32 = 5;

/// Whether keystrokes go to the controls or to the custom-values field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Custom,
}

/// The drawing surface: the last values and roles the session rendered
#[derive(Debug, Default)]
pub struct BarCanvas {
    pub values: Vec<i64>,
    pub roles: Vec<Role>,
}

impl Renderer for BarCanvas {
    fn render(&mut self, values: &[i64], roles: &[Role]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.roles.clear();
        self.roles.extend_from_slice(roles);
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    pub canvas: BarCanvas,

    /// Algorithm the next run will use
    pub algorithm: Algorithm,

    /// Size used by the next generate
    pub size: usize,

    pub input_mode: InputMode,

    /// Text typed into the custom-values field
    pub custom_input: String,

    pub status_message: String,

    /// Whether the status message reports a rejected action
    pub status_is_error: bool,

    /// Whether the last run finished (cleared by anything that redraws)
    pub is_sorted: bool,

    pub should_quit: bool,

    rng: StdRng,
}

impl App {
    /// Create a new app around `session`. The canvas starts with the
    /// session's current values.
    pub fn new(session: Session, algorithm: Algorithm, size: usize, rng: StdRng) -> Self {
        let mut app = App {
            session,
            canvas: BarCanvas::default(),
            algorithm,
            size: size.clamp(SIZE_MIN, SIZE_MAX),
            input_mode: InputMode::Normal,
            custom_input: String::new(),
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_sorted: false,
            should_quit: false,
            rng,
        };
        if let Err(e) = app.session.reset(&mut app.canvas) {
            app.set_error(e);
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next step of a running sort
            let timeout = self
                .session
                .until_due(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Let the session advance the running sort if a step is due
    pub fn tick(&mut self, now: Instant) {
        match self.session.tick(now, &mut self.canvas) {
            Ok(Tick::Finished) => {
                self.is_sorted = true;
                let steps = self
                    .session
                    .last_run(self.algorithm)
                    .map(|run| run.stats.steps)
                    .unwrap_or_default();
                self.set_status(format!("Sorted with {} in {} steps", self.algorithm, steps));
            }
            Ok(_) => {}
            Err(e) => self.set_error(e),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_controls_pane(
            frame,
            chunks[0],
            super::panes::ControlsRenderData {
                algorithm: self.algorithm,
                size: self.size,
                speed: self.session.speed(),
                custom_input: &self.custom_input,
                is_editing: self.input_mode == InputMode::Custom,
                last_run: self.session.last_run(self.algorithm),
            },
        );

        let title = match self.session.active_algorithm() {
            Some(algorithm) => format!(" {} ", algorithm),
            None => format!(" {} values ", self.canvas.values.len()),
        };
        super::panes::render_bars_pane(
            frame,
            chunks[1],
            &self.canvas.values,
            &self.canvas.roles,
            &title,
            self.session.is_sorting(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                stats: self.session.active_stats(),
                is_sorting: self.session.is_sorting(),
                is_sorted: self.is_sorted,
                is_editing: self.input_mode == InputMode::Custom,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode == InputMode::Custom {
            self.handle_custom_input(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('a') | KeyCode::Tab => {
                if self.session.is_sorting() {
                    self.set_error(SessionError::Busy);
                } else {
                    self.algorithm = self.algorithm.next();
                    self.set_status(format!("Algorithm: {}", self.algorithm));
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.size = (self.size + SIZE_STEP).min(SIZE_MAX);
                self.set_status(format!("Size: {} (press g to generate)", self.size));
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.size = self.size.saturating_sub(SIZE_STEP).max(SIZE_MIN);
                self.set_status(format!("Size: {} (press g to generate)", self.size));
            }
            KeyCode::Right => self.change_speed(self.session.speed().faster(SPEED_STEP)),
            KeyCode::Left => self.change_speed(self.session.speed().slower(SPEED_STEP)),
            KeyCode::Char('g') => {
                let result = self
                    .session
                    .generate(self.size, &mut self.rng, &mut self.canvas);
                self.report(result, format!("Generated {} values", self.size));
            }
            KeyCode::Char('c') => {
                if self.session.is_sorting() {
                    self.set_error(SessionError::Busy);
                } else {
                    self.input_mode = InputMode::Custom;
                    self.set_status("Type comma-separated numbers, Enter to apply, Esc to cancel");
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let result = self.session.start(self.algorithm, Instant::now());
                self.report(result, format!("Sorting with {}...", self.algorithm));
            }
            KeyCode::Char('f') => {
                let result = self.session.finish_now(&mut self.canvas);
                if result.is_ok() {
                    self.is_sorted = true;
                }
                self.report_keep_sorted(result, "Finished immediately".to_string());
            }
            KeyCode::Char('x') | KeyCode::Esc => {
                let result = self.session.cancel(&mut self.canvas);
                self.report(result, "Sort cancelled; values left as they were".to_string());
            }
            KeyCode::Char('r') => {
                let result = self.session.reset(&mut self.canvas);
                self.report(result, "Reset".to_string());
            }
            _ => {}
        }
    }

    fn handle_custom_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.set_status("Custom input cancelled");
            }
            KeyCode::Enter => {
                let result = self.session.use_custom(&self.custom_input, &mut self.canvas);
                if result.is_ok() {
                    self.input_mode = InputMode::Normal;
                }
                let len = self.session.values().len();
                self.report(result, format!("Using {} custom values", len));
            }
            KeyCode::Backspace => {
                self.custom_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | ' ' | '-' | '+') => {
                self.custom_input.push(c);
            }
            _ => {}
        }
    }

    fn change_speed(&mut self, speed: Speed) {
        self.session.set_speed(speed);
        self.set_status(format!("Speed: {} ({} ms per step)", speed.value(), speed.delay_ms()));
    }

    fn report(&mut self, result: Result<(), SessionError>, ok_message: String) {
        if result.is_ok() {
            self.is_sorted = false;
        }
        self.report_keep_sorted(result, ok_message);
    }

    fn report_keep_sorted(&mut self, result: Result<(), SessionError>, ok_message: String) {
        match result {
            Ok(()) => self.set_status(ok_message),
            Err(e) => self.set_error(e),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: SessionError) {
        debug!(%error, "action rejected");
        self.status_message = error.to_string();
        self.status_is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;

    fn app_with(values: Vec<i64>) -> App {
        App::new(
            Session::new(values, Speed::default()),
            Algorithm::Bubble,
            10,
            StdRng::seed_from_u64(5),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn canvas_starts_with_session_values() {
        let app = app_with(vec![3, 1, 2]);
        assert_eq!(app.canvas.values, vec![3, 1, 2]);
        assert_eq!(app.canvas.roles, vec![Role::Default; 3]);
    }

    #[test]
    fn space_starts_and_ticks_sort() {
        let mut app = app_with(vec![2, 1]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.is_sorting());

        let mut now = Instant::now();
        while app.session.is_sorting() {
            app.tick(now);
            now += Duration::from_secs(1);
        }
        assert!(app.is_sorted);
        assert_eq!(app.canvas.values, vec![1, 2]);
        assert!(app.canvas.roles.iter().all(|r| *r == Role::Finalized));
    }

    #[test]
    fn custom_input_mode_applies_values() {
        let mut app = app_with(vec![1]);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::Custom);
        for c in "4, 2,x 9".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.custom_input, "4, 2, 9");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.values(), &[4, 2, 9]);
    }

    #[test]
    fn invalid_custom_input_stays_in_edit_mode() {
        let mut app = app_with(vec![1, 2]);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char(','));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Custom);
        assert!(app.status_is_error);
        assert_eq!(app.session.values(), &[1, 2]);
    }

    #[test]
    fn generate_is_rejected_while_sorting() {
        let mut app = app_with(vec![5, 4, 3]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('g'));
        assert!(app.status_is_error);
        assert_eq!(app.session.values(), &[5, 4, 3]);
    }

    #[test]
    fn speed_keys_work_mid_run() {
        let mut app = app_with(vec![5, 4, 3]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.speed().value(), 65);
        assert!(!app.status_is_error);
    }

    #[test]
    fn finish_and_cancel_keys() {
        let mut app = app_with(vec![3, 2, 1]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.session.is_sorting());
        assert!(app.is_sorted);
        assert_eq!(app.canvas.values, vec![1, 2, 3]);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_is_error);
    }

    #[test]
    fn size_keys_clamp() {
        let mut app = app_with(vec![1]);
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.size, SIZE_MAX);
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.size, SIZE_MIN);
    }
}
