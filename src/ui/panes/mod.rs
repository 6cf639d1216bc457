//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the sequence as vertical bars, coloured by role
//! - [`controls`]: algorithm, size, speed and the custom-values field
//! - [`status`]: status bar with keybindings, run counters and state badge
//!
//! Each pane module exports a primary `render_*` function. Panes that need
//! more than a few inputs take a `*RenderData` struct.

pub mod bars;
pub mod controls;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, ControlsRenderData};
pub use status::{render_status_bar, StatusRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by the bordered panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
