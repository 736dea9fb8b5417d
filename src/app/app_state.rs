use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{ClipboardBackend, Config, SummaryConfig};
use crate::drops::{Dataset, GlobalStat};
use crate::export;
use crate::filter::{DropView, FilterQuery, TermFilter, filter_drops, filter_stats};
use crate::input::{FileLoader, FilterInputs, InputSource};
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::summary::{self, GeminiClient, SummaryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Drops,
    Stats,
}

/// Which filter field receives typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Terms,
    Occurrences,
}

pub struct App {
    /// Swapped wholesale on load and reload, never mutated in place
    pub dataset: Arc<Dataset>,
    pub source: InputSource,
    pub file_loader: Option<FileLoader>,
    pub view: ViewMode,
    pub focus: Focus,
    pub filters: FilterInputs,
    pub scroll: ScrollState,
    pub notification: NotificationState,
    pub summary: SummaryState,
    pub clipboard_backend: ClipboardBackend,
    pub export_dir: PathBuf,
    pub summary_config: SummaryConfig,
    pub should_quit: bool,
}

impl App {
    /// App with an empty dataset; the summary worker starts when configured
    pub fn new(source: InputSource, config: &Config) -> Self {
        let mut summary = SummaryState::new();
        summary.model = config.summary.model.clone();

        if let Some(client) = GeminiClient::from_config(&config.summary) {
            let (request_tx, request_rx) = std::sync::mpsc::channel();
            let (response_tx, response_rx) = std::sync::mpsc::channel();
            summary.set_channels(request_tx, response_rx);
            summary::spawn_worker(client, request_rx, response_tx);
        }

        Self {
            dataset: Arc::new(Dataset::from_text(source.display_name(), "")),
            source,
            file_loader: None,
            view: ViewMode::default(),
            focus: Focus::default(),
            filters: FilterInputs::new(),
            scroll: ScrollState::new(),
            notification: NotificationState::new(),
            summary,
            clipboard_backend: config.clipboard.backend,
            export_dir: config.export.directory.clone(),
            summary_config: config.summary.clone(),
            should_quit: false,
        }
    }

    /// App that shows a loading state until `loader` delivers the text
    pub fn new_with_loader(source: InputSource, loader: FileLoader, config: &Config) -> Self {
        let mut app = Self::new(source, config);
        app.file_loader = Some(loader);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.file_loader
            .as_ref()
            .is_some_and(|loader| loader.is_loading())
    }

    pub fn poll_file_loader(&mut self) {
        let Some(loader) = &mut self.file_loader else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };
        self.file_loader = None;

        match result {
            Ok(text) => self.load_text(&text),
            Err(e) => {
                log::error!("Loading {:?} failed: {}", self.source, e);
                self.notification
                    .show_error(&format!("Failed to load input: {}", e));
            }
        }
    }

    /// Parse `text` and replace the current dataset
    pub fn load_text(&mut self, text: &str) {
        let dataset = Dataset::from_text(self.source.display_name(), text);
        log::debug!(
            "Loaded {} records, {} distinct values",
            dataset.drops().len(),
            dataset.stats().len()
        );
        self.dataset = Arc::new(dataset);
        self.scroll.reset();
        self.summary.close();
    }

    /// Re-read the source file in the background
    pub fn reload(&mut self) {
        if !self.source.can_reload() {
            self.notification.show_warning("Cannot reload from stdin");
            return;
        }
        if self.is_loading() {
            return;
        }
        self.summary.close();
        self.file_loader = Some(self.source.spawn_loader());
        self.notification.show("Reloading...");
    }

    pub fn filter_query(&self) -> FilterQuery {
        self.filters.query()
    }

    pub fn visible_stats(&self, query: &FilterQuery) -> Vec<&GlobalStat> {
        filter_stats(self.dataset.stats(), query)
    }

    pub fn visible_drops(&self, terms: &TermFilter) -> Vec<DropView<'_>> {
        filter_drops(self.dataset.drops(), terms)
    }

    /// Values on screen in display order, for the clipboard
    pub fn visible_values(&self) -> Vec<&str> {
        let query = self.filter_query();
        match self.view {
            ViewMode::Stats => self
                .visible_stats(&query)
                .into_iter()
                .map(|stat| stat.value.as_str())
                .collect(),
            ViewMode::Drops => self
                .visible_drops(&query.terms)
                .into_iter()
                .flat_map(|view| view.values)
                .collect(),
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            ViewMode::Drops => ViewMode::Stats,
            ViewMode::Stats => ViewMode::Drops,
        };
        // Occurrence filter has no field in the drops view
        if self.view == ViewMode::Drops {
            self.focus = Focus::Terms;
        }
        self.scroll.reset();
    }

    pub fn toggle_focus(&mut self) {
        if self.view != ViewMode::Stats {
            return;
        }
        self.focus = match self.focus {
            Focus::Terms => Focus::Occurrences,
            Focus::Occurrences => Focus::Terms,
        };
    }

    pub fn focused_textarea(&mut self) -> &mut tui_textarea::TextArea<'static> {
        match self.focus {
            Focus::Terms => &mut self.filters.terms,
            Focus::Occurrences => &mut self.filters.occurrences,
        }
    }

    pub fn export_csv(&mut self) {
        let query = self.filter_query();
        let stats = filter_stats(self.dataset.stats(), &query);
        match export::export_csv(&self.export_dir, &stats) {
            Ok(Some(path)) => self
                .notification
                .show(&format!("Exported {} values to {}", stats.len(), path.display())),
            Ok(None) => self.notification.show_warning("Nothing to export"),
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }

    pub fn export_report(&mut self) {
        let now = chrono::Local::now().naive_local();
        match export::export_report(&self.export_dir, &self.dataset, now) {
            Ok(Some(path)) => self
                .notification
                .show(&format!("Report written to {}", path.display())),
            Ok(None) => self.notification.show_warning("No DROP records to report"),
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }

    /// Open the popup and ask for a summary of the whole dataset
    pub fn request_summary(&mut self) {
        if !self.summary_config.enabled {
            self.notification
                .show_warning("Summary disabled. Set [summary] enabled = true in config.");
            return;
        }
        if !self.summary.is_configured() {
            self.notification.show_warning(&format!(
                "No API key. Set summary.api_key or ${}.",
                crate::config::API_KEY_ENV
            ));
            return;
        }
        if self.dataset.is_empty() {
            self.notification.show_warning("No DROP records to summarize");
            return;
        }

        let payload = summary::build_payload(
            &self.dataset,
            self.summary_config.top_values,
            self.summary_config.sample_drops,
        );
        match summary::build_prompt(&payload) {
            Ok(prompt) => {
                self.summary.request(prompt);
            }
            Err(e) => {
                log::error!("Failed to build summary prompt: {}", e);
                self.notification.show_error(summary::FAILURE_MESSAGE);
            }
        }
    }

    pub fn toggle_summary(&mut self) {
        if self.summary.visible {
            self.summary.close();
        } else {
            self.request_summary();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
