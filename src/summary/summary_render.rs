use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::summary_state::{SummaryState, SummaryStatus};
use crate::theme;
use crate::widgets::{popup, scrollbar::render_vertical_scrollbar};

const POPUP_WIDTH_PERCENT: u16 = 70;
const POPUP_HEIGHT_PERCENT: u16 = 60;
const PENDING_MESSAGE: &str = "Analyzing traffic patterns...";

/// Rows `text` takes when wrapped at `width` columns
fn wrapped_line_count(text: &str, width: u16) -> usize {
    let width = width.max(1) as usize;
    text.lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum()
}

/// Centered popup over `area` showing the summary status
pub fn render_popup(summary: &mut SummaryState, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let popup_area = popup::centered_popup(area, POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT);
    if popup_area.width < 10 || popup_area.height < 4 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(
            format!(" Summary ({}) ", summary.model),
            theme::summary::TITLE,
        ))
        .title_bottom(Line::styled(
            " Esc close \u{2022} \u{2191}/\u{2193} scroll ",
            Style::default().fg(theme::summary::HINT),
        ))
        .border_style(Style::default().fg(theme::summary::BORDER))
        .style(Style::default().bg(theme::summary::BACKGROUND));

    let inner = block.inner(popup_area).inner(Margin::new(1, 0));
    frame.render_widget(block, popup_area);

    let (text, color) = match &summary.status {
        SummaryStatus::Idle => (String::new(), theme::summary::TEXT),
        SummaryStatus::Pending => (PENDING_MESSAGE.to_string(), theme::summary::PENDING),
        SummaryStatus::Ready(text) => (text.clone(), theme::summary::TEXT),
        SummaryStatus::Failed(message) => (message.clone(), theme::summary::FAILED),
    };

    let total = wrapped_line_count(&text, inner.width);
    summary.scroll.update_bounds(total, inner.height);
    let offset = summary.scroll.offset;

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, inner);

    render_vertical_scrollbar(
        frame,
        popup_area.inner(Margin::new(0, 1)),
        total,
        inner.height as usize,
        offset,
    );

    Some(popup_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(summary: &mut SummaryState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_popup(summary, f, area);
            })
            .unwrap();
        terminal.backend().to_string()
    }

    fn summary_with(status: SummaryStatus) -> SummaryState {
        let mut summary = SummaryState::new();
        summary.model = "gemini-test".to_string();
        summary.visible = true;
        summary.status = status;
        summary
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("abcd", 2), 2);
        assert_eq!(wrapped_line_count("a\n\nb", 10), 3);
        assert_eq!(wrapped_line_count("", 10), 0);
    }

    #[test]
    fn test_title_shows_model() {
        let output = render(&mut summary_with(SummaryStatus::Idle));
        assert!(output.contains("Summary (gemini-test)"));
    }

    #[test]
    fn test_pending_message() {
        let output = render(&mut summary_with(SummaryStatus::Pending));
        assert!(output.contains(PENDING_MESSAGE));
    }

    #[test]
    fn test_ready_text() {
        let output = render(&mut summary_with(SummaryStatus::Ready(
            "## Findings\nNo anomalies.".to_string(),
        )));
        assert!(output.contains("## Findings"));
        assert!(output.contains("No anomalies."));
    }

    #[test]
    fn test_long_text_scroll_bounds() {
        let text = (0..100).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let mut summary = summary_with(SummaryStatus::Ready(text));
        summary.scroll.offset = 1000;
        render(&mut summary);
        assert!(summary.scroll.max_offset > 0);
        assert_eq!(summary.scroll.offset, summary.scroll.max_offset);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        let mut summary = summary_with(SummaryStatus::Pending);
        terminal
            .draw(|f| {
                let area = f.area();
                assert!(render_popup(&mut summary, f, area).is_none());
            })
            .unwrap();
    }
}
