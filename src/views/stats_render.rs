use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::drops::GlobalStat;
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

const MIN_PREVALENCE: usize = 5;
const COUNT_WIDTH: usize = 11;
const MAX_VALUE_WIDTH: usize = 45;
const MIN_BAR_WIDTH: usize = 4;

/// Share of the highest count, never below 5% so rare values stay visible
pub fn prevalence_percent(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * 100 / max_count).clamp(MIN_PREVALENCE, 100)
}

fn prevalence_bar(percent: usize, width: usize) -> Vec<Span<'static>> {
    let filled = (width * percent).div_ceil(100).min(width);
    vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(theme::stats::BAR_FILLED),
        ),
        Span::styled(
            "\u{2591}".repeat(width - filled),
            Style::default().fg(theme::stats::BAR_EMPTY),
        ),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('\u{2026}');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Value column width over every filtered row, so it stays put while scrolling
fn value_column_width(stats: &[&GlobalStat]) -> usize {
    stats
        .iter()
        .map(|stat| stat.value.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(12, MAX_VALUE_WIDTH)
}

fn stat_lines<'a>(
    stats: &[&'a GlobalStat],
    max_count: usize,
    value_width: usize,
    width: u16,
) -> Vec<Line<'a>> {
    let bar_width = (width as usize)
        .saturating_sub(value_width + COUNT_WIDTH + 4)
        .max(MIN_BAR_WIDTH);

    stats
        .iter()
        .map(|stat| {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled(
                    pad(&stat.value, value_width),
                    Style::default().fg(theme::stats::VALUE),
                ),
                Span::styled(
                    format!("{:>width$}", stat.count, width = COUNT_WIDTH),
                    theme::stats::COUNT,
                ),
                Span::raw("  "),
            ];
            spans.extend(prevalence_bar(
                prevalence_percent(stat.count, max_count),
                bar_width,
            ));
            Line::from(spans)
        })
        .collect()
}

fn header_line(width: u16, value_width: usize) -> Line<'static> {
    let text = format!(
        " {}{:>count$}  PREVALENCE",
        pad("IP ADDRESS / VALUE", value_width),
        "OCCURRENCES",
        count = COUNT_WIDTH
    );
    Line::styled(pad(&text, width as usize), theme::stats::HEADER)
}

pub fn render_view(app: &mut App, frame: &mut Frame, area: Rect) {
    let query = app.filter_query();
    let dataset = app.dataset.clone();
    let stats = crate::filter::filter_stats(dataset.stats(), &query);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Global Stats ({}) ", dataset.stats().len()))
        .border_style(Style::default().fg(theme::stats::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.is_loading() {
        super::render_placeholder(frame, inner, "Loading...", "");
        return;
    }
    if dataset.is_empty() {
        super::render_placeholder(frame, inner, "No DROP records found", "");
        return;
    }
    if inner.height < 3 {
        return;
    }

    let count_line = Line::styled(
        format!(" Showing {} items", stats.len()),
        Style::default().fg(theme::stats::RESULT_COUNT),
    );
    frame.render_widget(
        Paragraph::new(count_line),
        Rect { height: 1, ..inner },
    );

    let value_width = value_column_width(&stats);
    frame.render_widget(
        Paragraph::new(header_line(inner.width, value_width)),
        Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        },
    );

    let rows_area = Rect {
        y: inner.y + 2,
        height: inner.height - 2,
        ..inner
    };

    if stats.is_empty() {
        let message = format!("No matches found for \"{}\"", no_match_query(app));
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" {}", message),
                Style::default().fg(theme::stats::NO_MATCHES),
            )),
            rows_area,
        );
        return;
    }

    let total = stats.len();
    app.scroll.update_bounds(total, rows_area.height);
    let offset = app.scroll.offset;
    let end = (offset + rows_area.height as usize).min(total);

    let lines = stat_lines(
        &stats[offset..end],
        dataset.max_count(),
        value_width,
        rows_area.width,
    );
    frame.render_widget(Paragraph::new(lines), rows_area);
    render_vertical_scrollbar(
        frame,
        area.inner(Margin::new(0, 1)),
        total,
        rows_area.height as usize,
        offset,
    );
}

/// The term query when there is one, otherwise the occurrence query
fn no_match_query(app: &App) -> String {
    let terms = app.filters.term_text();
    let terms = terms.trim();
    if terms.is_empty() {
        app.filters.occurrence_text().trim().to_string()
    } else {
        terms.to_string()
    }
}
