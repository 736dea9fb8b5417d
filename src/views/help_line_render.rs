use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ViewMode};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.summary.visible {
        hints!["Esc" => "Close", "\u{2191}/\u{2193}" => "Scroll", "Ctrl+C" => "Quit"]
    } else if app.view == ViewMode::Stats {
        hints!["Ctrl+T" => "Drops", "Tab" => "Switch Field", "Ctrl+Y" => "Copy", "Ctrl+E" => "CSV", "Ctrl+R" => "Report", "Ctrl+A" => "Summary", "Ctrl+L" => "Reload", "Ctrl+C" => "Quit"]
    } else {
        hints!["Ctrl+T" => "Stats", "Ctrl+Y" => "Copy", "Ctrl+R" => "Report", "Ctrl+A" => "Summary", "Ctrl+L" => "Reload", "Ctrl+C" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let help = Paragraph::new(Line::from(build_styled_spans(&hints)));
    frame.render_widget(help, area);
}
