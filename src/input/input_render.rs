use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Draw one filter field; only the focused field shows a cursor
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    textarea: &mut TextArea<'static>,
    title: &str,
    focused: bool,
) {
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&*textarea, inner);
}
