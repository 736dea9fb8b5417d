use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    Clipboard::new()
        .map_err(|_| ClipboardError::SystemUnavailable)?
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
