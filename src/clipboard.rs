//! Clipboard support for copying visible values
//!
//! Backends:
//! - System clipboard (arboard)
//! - OSC 52 escape sequence, for SSH and tmux sessions
//! - Auto: system first, OSC 52 when the system clipboard is unavailable

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
