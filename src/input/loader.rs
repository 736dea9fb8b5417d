//! File Loader Module
//!
//! Reads the whole input on a background thread so the UI can draw a
//! loading state instead of blocking on a large file or a slow pipe.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::DroplensError;

/// Where the log text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }

    /// File name used for report naming; empty for stdin
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            InputSource::Stdin => String::new(),
        }
    }

    /// Stdin can only be read once
    pub fn can_reload(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    pub fn spawn_loader(&self) -> FileLoader {
        match self {
            InputSource::File(path) => FileLoader::spawn_load(path.clone()),
            InputSource::Stdin => FileLoader::spawn_load_stdin(),
        }
    }

    /// Blocking read, used by the headless commands
    pub fn read_sync(&self) -> Result<String, DroplensError> {
        match self {
            InputSource::File(path) => load_file_sync(path),
            InputSource::Stdin => load_stdin_sync(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete,
    Error(DroplensError),
}

pub struct FileLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<String, DroplensError>>>,
}

impl FileLoader {
    pub fn spawn_load(path: PathBuf) -> Self {
        Self::spawn(move || load_file_sync(&path))
    }

    pub fn spawn_load_stdin() -> Self {
        Self::spawn(load_stdin_sync)
    }

    fn spawn(load: impl FnOnce() -> Result<String, DroplensError> + Send + 'static) -> Self {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(load());
        });
        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Non-blocking; `Some` exactly once, when the read finishes
    pub fn poll(&mut self) -> Option<Result<String, DroplensError>> {
        let rx = self.rx.as_ref()?;

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DroplensError::Io(
                "File loader thread disconnected".to_string(),
            )),
        };

        self.rx = None;
        self.state = match &result {
            Ok(_) => LoadingState::Complete,
            Err(e) => LoadingState::Error(e.clone()),
        };
        Some(result)
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Invalid UTF-8 surfaces as `DroplensError::InvalidText`
fn load_file_sync(path: &Path) -> Result<String, DroplensError> {
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

fn load_stdin_sync() -> Result<String, DroplensError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    log::debug!("Read {} bytes from stdin", buffer.len());
    Ok(buffer)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
