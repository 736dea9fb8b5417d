//! Shared test fixtures and helpers

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use crate::app::App;
    use crate::config::{ClipboardBackend, Config};
    use crate::input::InputSource;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Two records with a repeated value, quotes and decorative lines
    pub const SAMPLE_LOG: &str = "\
Firewall export
DROP 1: 09:15
\"192.168.1.1\"
10.0.0.5
...
192.168.1.1
-----
DROP 2: 10:30
8.8.8.8
192.168.1.1
8.8.4.4
";

    /// App loaded from `text`, copying through OSC 52 so tests never
    /// touch the system clipboard
    pub fn test_app(text: &str) -> App {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Osc52;
        config.export.directory = std::env::temp_dir();

        let mut app = App::new(
            InputSource::File(PathBuf::from("firewall_logs.txt")),
            &config,
        );
        app.load_text(text);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type `text` into the focused filter field, one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
