//! The two dataset views and the bottom help line

pub mod drops_render;
pub mod help_line_render;
pub mod stats_render;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::theme;

/// Centered message drawn instead of content
pub(crate) fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(title.to_string(), theme::placeholder::TITLE));
    if !body.is_empty() {
        lines.push(Line::styled(
            body.to_string(),
            Style::default().fg(theme::placeholder::BODY),
        ));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
