use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::clipboard;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_file_loader();
        self.summary.poll_response();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Pasted lists keep their line breaks; the filters split on them
    pub fn handle_paste_event(&mut self, text: String) {
        if self.summary.visible {
            return;
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.focused_textarea().insert_str(&normalized) {
            self.scroll.reset();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.summary.visible {
            self.handle_summary_popup_key(key);
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        if clipboard::clipboard_events::handle_clipboard_key(self, key) {
            return;
        }

        self.handle_filter_key(key);
    }

    fn handle_summary_popup_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('a') if ctrl => self.summary.close(),
            KeyCode::Esc => self.summary.close(),
            KeyCode::Down => self.summary.scroll.scroll_down(1),
            KeyCode::Up => self.summary.scroll.scroll_up(1),
            KeyCode::PageDown => self.summary.scroll.page_down(),
            KeyCode::PageUp => self.summary.scroll.page_up(),
            KeyCode::Home => self.summary.scroll.jump_to_top(),
            KeyCode::End => self.summary.scroll.jump_to_bottom(),
            _ => {}
        }
    }

    /// Everything else edits the focused field; an edit restarts the view
    /// at the top since the filtered content changed
    fn handle_filter_key(&mut self, key: KeyEvent) {
        // Newlines are separators anyway; Enter would only grow the field
        if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
            return;
        }
        if self.focused_textarea().input(key) {
            self.scroll.reset();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
