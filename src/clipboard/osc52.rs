//! OSC 52 clipboard backend
//!
//! The terminal emulator, not the host, owns the clipboard here, which is
//! what makes copying work over SSH.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

fn write_sequence(out: &mut impl Write, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
