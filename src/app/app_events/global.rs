use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, ViewMode};

/// Keys that work regardless of focus. Returns true when handled.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_view();
            true
        }
        KeyCode::F(2) => {
            app.toggle_view();
            true
        }
        KeyCode::Char('l') if ctrl => {
            app.reload();
            true
        }
        KeyCode::Char('e') if ctrl => {
            app.export_csv();
            true
        }
        KeyCode::Char('r') if ctrl => {
            app.export_report();
            true
        }
        KeyCode::Char('a') if ctrl => {
            app.toggle_summary();
            true
        }
        KeyCode::Tab | KeyCode::BackTab if app.view == ViewMode::Stats => {
            app.toggle_focus();
            true
        }
        KeyCode::Esc => {
            app.notification.dismiss();
            true
        }

        KeyCode::Down => {
            app.scroll.scroll_down(1);
            true
        }
        KeyCode::Up => {
            app.scroll.scroll_up(1);
            true
        }
        KeyCode::PageDown => {
            app.scroll.page_down();
            true
        }
        KeyCode::PageUp => {
            app.scroll.page_up();
            true
        }
        KeyCode::Home => {
            app.scroll.jump_to_top();
            true
        }
        KeyCode::End => {
            app.scroll.jump_to_bottom();
            true
        }

        _ => false,
    }
}
