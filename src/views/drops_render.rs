use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::filter::DropView;
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

/// Lines for one record: header, one bullet per visible value, spacer
fn record_lines<'a>(view: &DropView<'a>, width: u16) -> Vec<Line<'a>> {
    let badge = format!(" DROP {} ", view.record.id());
    let time = format!("  {}", view.record.time());
    let items = format!("{} Items", view.record.unique_values().len());

    let used = badge.chars().count() + time.chars().count() + items.chars().count();
    let gap = (width as usize).saturating_sub(used + 1).max(1);

    let mut lines = Vec::with_capacity(view.values.len() + 2);
    lines.push(Line::from(vec![
        Span::styled(badge, theme::drops::BADGE),
        Span::styled(time, theme::drops::TIME),
        Span::raw(" ".repeat(gap)),
        Span::styled(items, Style::default().fg(theme::drops::ITEM_COUNT)),
    ]));

    for value in &view.values {
        lines.push(Line::from(vec![
            Span::styled("  \u{2022} ", Style::default().fg(theme::drops::BULLET)),
            Span::styled(*value, Style::default().fg(theme::drops::VALUE)),
        ]));
    }
    lines.push(Line::raw(""));
    lines
}

/// Lines `offset..offset + height` of the full record listing. Records
/// wholly above the window are skipped without building their lines.
fn window_lines<'a>(
    views: &[DropView<'a>],
    width: u16,
    offset: usize,
    height: usize,
) -> Vec<Line<'a>> {
    let mut skip = offset;
    let mut lines = Vec::with_capacity(height);
    for view in views {
        if lines.len() >= height {
            break;
        }
        let record_height = view.values.len() + 2;
        if skip >= record_height {
            skip -= record_height;
            continue;
        }
        let remaining = height - lines.len();
        lines.extend(
            record_lines(view, width)
                .into_iter()
                .skip(skip)
                .take(remaining),
        );
        skip = 0;
    }
    lines
}

pub fn render_view(app: &mut App, frame: &mut Frame, area: Rect) {
    let query = app.filter_query();
    let dataset = app.dataset.clone();
    let views = crate::filter::filter_drops(dataset.drops(), &query.terms);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Drops ({}) ", views.len()))
        .border_style(Style::default().fg(theme::drops::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.is_loading() {
        super::render_placeholder(frame, inner, "Loading...", "");
        return;
    }
    if dataset.is_empty() {
        super::render_placeholder(
            frame,
            inner,
            "No DROP records found",
            "Expected lines like \"DROP 12: 09:15\"",
        );
        return;
    }
    if views.is_empty() {
        super::render_placeholder(
            frame,
            inner,
            &format!("No matches found for \"{}\"", app.filters.term_text().trim()),
            "",
        );
        return;
    }

    let total: usize = views.iter().map(|view| view.values.len() + 2).sum();
    app.scroll.update_bounds(total, inner.height);
    let offset = app.scroll.offset;

    let lines = window_lines(&views, inner.width, offset, inner.height as usize);
    frame.render_widget(Paragraph::new(lines), inner);
    render_vertical_scrollbar(
        frame,
        area.inner(Margin::new(0, 1)),
        total,
        inner.height as usize,
        offset,
    );
}
