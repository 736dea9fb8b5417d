use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Draw the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let colors = notif.notification_type.colors();
    let frame_area = frame.area();

    let width = (notif.message.chars().count() as u16 + 4)
        .min(frame_area.width.saturating_sub(MARGIN * 2));
    let height = 3.min(frame_area.height.saturating_sub(MARGIN * 2));
    if width < 5 || height < 3 {
        return;
    }

    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN,
        width,
        height,
    };

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
