use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus, ViewMode};
use crate::input::input_render;
use crate::notification::render_notification;
use crate::theme;
use crate::views::{drops_render, help_line_render, stats_render};

const FILTER_HEIGHT: u16 = 4;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FILTER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_tabs(frame, layout[0]);
        self.render_filters(frame, layout[1]);

        match self.view {
            ViewMode::Drops => drops_render::render_view(self, frame, layout[2]),
            ViewMode::Stats => stats_render::render_view(self, frame, layout[2]),
        }

        help_line_render::render_line(self, frame, layout[3]);

        if self.summary.visible {
            crate::summary::summary_render::render_popup(&mut self.summary, frame, layout[2]);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let tab = |label: String, active: bool| {
            let style = if active {
                theme::tabs::ACTIVE
            } else {
                theme::tabs::INACTIVE
            };
            Span::styled(format!(" {} ", label), style)
        };

        let mut spans = vec![
            Span::raw(" "),
            tab(
                format!("Drops List ({})", self.dataset.drops().len()),
                self.view == ViewMode::Drops,
            ),
            Span::raw(" "),
            tab(
                format!("Global Stats ({})", self.dataset.stats().len()),
                self.view == ViewMode::Stats,
            ),
        ];

        let source = match self.dataset.source_name() {
            "" => "stdin",
            name => name,
        };
        spans.push(Span::styled(
            format!("  {}", source),
            Style::default().fg(theme::tabs::SOURCE),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_filters(&mut self, frame: &mut Frame, area: Rect) {
        let terms_focused = !self.summary.visible && self.focus == Focus::Terms;

        if self.view == ViewMode::Drops {
            input_render::render_field(
                frame,
                area,
                &mut self.filters.terms,
                "Search values",
                terms_focused,
            );
            return;
        }

        let columns = Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(area);
        let occurrences_focused = !self.summary.visible && self.focus == Focus::Occurrences;

        input_render::render_field(
            frame,
            columns[0],
            &mut self.filters.terms,
            "Search values",
            terms_focused,
        );
        input_render::render_field(
            frame,
            columns[1],
            &mut self.filters.occurrences,
            "Exact occurrences",
            occurrences_focused,
        );
    }
}
