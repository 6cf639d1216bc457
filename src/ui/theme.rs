use crate::highlight::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,          // Bars with no role
    pub compared: Color,     // Orange
    pub swapped: Color,      // Red
    pub pivot: Color,        // Purple
    pub active_index: Color, // Blue
    pub working_range: Color,
    pub written: Color,
    pub finalized: Color, // Green
}

impl Theme {
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Default => self.bar,
            Role::Compared => self.compared,
            Role::Swapped => self.swapped,
            Role::Pivot => self.pivot,
            Role::ActiveIndex => self.active_index,
            Role::WorkingRange => self.working_range,
            Role::Written => self.written,
            Role::Finalized => self.finalized,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    bar: Color::Rgb(147, 153, 178),            // Grey
    compared: Color::Rgb(250, 179, 135),       // Orange
    swapped: Color::Rgb(243, 139, 168),        // Red
    pivot: Color::Rgb(203, 166, 247),          // Mauve
    active_index: Color::Rgb(137, 180, 250),   // Blue
    working_range: Color::Rgb(137, 220, 235),  // Light blue
    written: Color::Rgb(243, 139, 168),        // Red, like the source of the write
    finalized: Color::Rgb(166, 227, 161),      // Green
};
