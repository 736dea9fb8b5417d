//! The currently loaded dataset
//!
//! Parsed records and their frequency table are produced together and
//! shared as one immutable value. Loading new input builds a new
//! `Dataset` and replaces the old one wholesale.

use super::aggregate::aggregate;
use super::parser::parse;
use super::types::{DropRecord, GlobalStat};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    source_name: String,
    drops: Vec<DropRecord>,
    stats: Vec<GlobalStat>,
}

impl Dataset {
    pub fn from_text(source_name: impl Into<String>, text: &str) -> Self {
        let drops = parse(text);
        let stats = aggregate(&drops);
        let source_name = source_name.into();

        log::debug!(
            "Dataset '{}' built: {} drops, {} distinct values",
            source_name,
            drops.len(),
            stats.len()
        );

        Self {
            source_name,
            drops,
            stats,
        }
    }

    /// File name the text came from, empty for stdin
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn drops(&self) -> &[DropRecord] {
        &self.drops
    }

    /// Global stats in first-encountered order
    pub fn stats(&self) -> &[GlobalStat] {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Highest count in the table, used to scale prevalence bars
    pub fn max_count(&self) -> usize {
        self.stats.iter().map(|s| s.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_builds_drops_and_stats_together() {
        let dataset = Dataset::from_text("log.txt", "DROP 1: 1:00\na\na\nb");
        assert_eq!(dataset.source_name(), "log.txt");
        assert_eq!(dataset.drops().len(), 1);
        assert_eq!(
            dataset.stats(),
            &[GlobalStat::new("a", 2), GlobalStat::new("b", 1)]
        );
        assert_eq!(dataset.max_count(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_text_without_headers_is_empty() {
        let dataset = Dataset::from_text("", "just text\n1.1.1.1");
        assert!(dataset.is_empty());
        assert!(dataset.stats().is_empty());
        assert_eq!(dataset.max_count(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Dataset::default().is_empty());
    }
}
