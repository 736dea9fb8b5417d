use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;

/// `Ctrl+Y` copies what the current view shows
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_visible_values(app);
        return true;
    }
    false
}

/// Copy visible values one per line. Returns true when something was copied.
pub fn copy_visible_values(app: &mut App) -> bool {
    let values = app.visible_values();
    if values.is_empty() {
        return false;
    }

    let count = values.len();
    let text = values.join("\n");

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(&format!("Copied {} values!", count));
            true
        }
        Err(e) => {
            log::error!("Clipboard copy failed: {}", e);
            app.notification.show_error(&e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewMode;
    use crate::test_utils::test_helpers::{SAMPLE_LOG, ctrl, key, test_app};

    #[test]
    fn test_ctrl_y_is_handled() {
        let mut app = test_app(SAMPLE_LOG);
        assert!(handle_clipboard_key(&mut app, ctrl('y')));
        assert!(!handle_clipboard_key(&mut app, key(KeyCode::Char('y'))));
    }

    #[test]
    fn test_copy_stats_view_shows_count() {
        let mut app = test_app(SAMPLE_LOG);
        app.view = ViewMode::Stats;

        assert!(copy_visible_values(&mut app));
        assert_eq!(app.notification.current_message(), Some("Copied 4 values!"));
    }

    #[test]
    fn test_copy_drops_view_counts_every_visible_value() {
        let mut app = test_app(SAMPLE_LOG);
        assert_eq!(app.view, ViewMode::Drops);

        assert!(copy_visible_values(&mut app));
        // 2 unique in the first record, 3 in the second
        assert_eq!(app.notification.current_message(), Some("Copied 5 values!"));
    }

    #[test]
    fn test_empty_selection_copies_nothing_silently() {
        let mut app = test_app(SAMPLE_LOG);
        app.filters.terms.insert_str("no-such-value");

        assert!(!copy_visible_values(&mut app));
        assert!(app.notification.current().is_none());
    }
}
