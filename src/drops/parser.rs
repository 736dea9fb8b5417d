//! Line-classifying state machine over DROP log text

use super::content::clean_content_line;
use super::header::{DropHeader, match_header};
use super::types::DropRecord;

/// Record being filled, not yet sealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRecord {
    id: String,
    time: String,
    raw_values: Vec<String>,
}

impl OpenRecord {
    fn from_header(header: DropHeader) -> Self {
        Self {
            id: header.id,
            time: header.time,
            raw_values: Vec::new(),
        }
    }

    fn seal(self) -> DropRecord {
        DropRecord::seal(self.id, self.time, self.raw_values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    SeekingHeader,
    InRecord(OpenRecord),
}

/// Feeds lines one at a time and collects sealed records.
///
/// Lines before the first header are dropped. [`DropParser::finish`]
/// seals whatever record is still open.
#[derive(Debug, Default)]
pub struct DropParser {
    state: ParserState,
    sealed: Vec<DropRecord>,
}

impl DropParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn feed_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(header) = match_header(trimmed) {
            self.seal_open_record();
            self.state = ParserState::InRecord(OpenRecord::from_header(header));
            return;
        }

        if let ParserState::InRecord(open) = &mut self.state
            && let Some(value) = clean_content_line(trimmed)
        {
            open.raw_values.push(value);
        }
    }

    pub fn finish(mut self) -> Vec<DropRecord> {
        self.seal_open_record();
        self.sealed
    }

    fn seal_open_record(&mut self) {
        if let ParserState::InRecord(open) = std::mem::take(&mut self.state) {
            self.sealed.push(open.seal());
        }
    }
}

/// Parse a whole text blob into sealed records, in input order
pub fn parse(text: &str) -> Vec<DropRecord> {
    let mut parser = DropParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    let drops = parser.finish();

    log::debug!("Parsed {} drop records", drops.len());

    drops
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
