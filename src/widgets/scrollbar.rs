use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::theme;

/// Right-edge scrollbar; drawn only when the content overflows
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_lines: usize,
    viewport_height: usize,
    offset: usize,
) {
    if viewport_height == 0 || total_lines <= viewport_height {
        return;
    }

    let max_offset = total_lines - viewport_height;
    let mut state = ScrollbarState::new(max_offset + 1)
        .position(offset.min(max_offset))
        .viewport_content_length(viewport_height);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme::scrollbar::DEFAULT));

    frame.render_stateful_widget(scrollbar, area, &mut state);
}
