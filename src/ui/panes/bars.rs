//! Bar chart of the current sequence
//!
//! One bar per value, scaled against the largest value, coloured by the role
//! the last snapshot gave its index. Values at or below zero draw as empty
//! bars.

use super::border_style;
use crate::highlight::Role;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Bar width and gap that fit `count` bars into `width` columns
pub(crate) fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u32;
    let width = u32::from(width);
    // a one-column gap only when every bar still gets at least one column
    let gap = if width >= 2 * count - 1 { 1 } else { 0 };
    let bar = (width.saturating_sub(gap * (count - 1)) / count).max(1);
    (bar.min(u32::from(u16::MAX)) as u16, gap as u16)
}

/// Render the bars pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i64],
    roles: &[Role],
    title: &str,
    is_sorting: bool,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style(is_sorting));

    if values.is_empty() {
        let paragraph = Paragraph::new("(no values) press g to generate or c to enter your own")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let max = values.iter().copied().max().unwrap_or(0).max(1) as u64;
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let role = roles.get(idx).copied().unwrap_or_default();
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(DEFAULT_THEME.role_color(role)))
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), values.len());
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_area_gets_gaps() {
        assert_eq!(bar_geometry(100, 10), (9, 1));
        assert_eq!(bar_geometry(19, 10), (1, 1));
    }

    #[test]
    fn narrow_area_drops_gaps() {
        assert_eq!(bar_geometry(18, 10), (1, 0));
        assert_eq!(bar_geometry(3, 10), (1, 0));
        assert_eq!(bar_geometry(0, 0), (1, 0));
    }
}
