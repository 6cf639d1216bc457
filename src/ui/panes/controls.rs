//! Control panel: algorithm choice, array size, speed and custom input

use super::border_style;
use crate::driver::Speed;
use crate::highlight::Role;
use crate::session::RunSummary;
use crate::stepper::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub algorithm: Algorithm,
    pub size: usize,
    pub speed: Speed,
    pub custom_input: &'a str,
    pub is_editing: bool,
    pub last_run: Option<&'a RunSummary>,
}

const LEGEND: [Role; 7] = [
    Role::Compared,
    Role::Swapped,
    Role::Pivot,
    Role::ActiveIndex,
    Role::WorkingRange,
    Role::Written,
    Role::Finalized,
];

fn setting<'a>(label: &'a str, value: String, keys: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys, Style::default().fg(DEFAULT_THEME.comment)),
    ]
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style(data.is_editing));

    let mut first = setting("Algorithm: ", data.algorithm.to_string(), " [a]   ");
    first.extend(setting("Size: ", data.size.to_string(), " [-/+]   "));
    first.extend(setting(
        "Speed: ",
        format!("{} ({} ms)", data.speed.value(), data.speed.delay_ms()),
        " [←/→]",
    ));

    let input_style = if data.is_editing {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .bg(DEFAULT_THEME.current_line_bg)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    let placeholder = if data.custom_input.is_empty() && !data.is_editing {
        "10, 3, 25, 7, 18".to_string()
    } else if data.is_editing {
        format!("{}_", data.custom_input)
    } else {
        data.custom_input.to_string()
    };
    let second = vec![
        Span::styled("Custom: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(placeholder, input_style),
        Span::styled(" [c]", Style::default().fg(DEFAULT_THEME.comment)),
    ];

    let last_run = match data.last_run {
        Some(run) => format!(
            "Last {}: {} values, {} steps ({} compares, {} swaps, {} writes)",
            run.algorithm,
            run.len,
            run.stats.steps,
            run.stats.comparisons,
            run.stats.swaps,
            run.stats.writes
        ),
        None => format!("No {} run yet", data.algorithm),
    };
    let third = Line::from(Span::styled(
        last_run,
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let mut legend = Vec::new();
    for role in LEGEND {
        legend.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.role_color(role)),
        ));
        legend.push(Span::styled(
            format!("{}  ", role.label()),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    let paragraph = Paragraph::new(vec![
        Line::from(first),
        Line::from(second),
        third,
        Line::from(legend),
    ])
    .block(block);
    frame.render_widget(paragraph, area);
}
