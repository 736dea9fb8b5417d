//! Type definitions for parsed DROP sections

use std::collections::HashSet;

use serde::Serialize;

/// One sealed DROP section.
///
/// Only constructed through [`DropRecord::seal`], which derives
/// `unique_values` from `raw_values`; neither list changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropRecord {
    id: String,
    time: String,
    raw_values: Vec<String>,
    unique_values: Vec<String>,
}

impl DropRecord {
    /// Seal a record, computing the first-seen-order deduplication.
    pub fn seal(id: String, time: String, raw_values: Vec<String>) -> Self {
        let mut seen = HashSet::with_capacity(raw_values.len());
        let unique_values = raw_values
            .iter()
            .filter(|value| seen.insert(value.as_str()))
            .cloned()
            .collect();

        Self {
            id,
            time,
            raw_values,
            unique_values,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// All accepted content lines, duplicates retained
    pub fn raw_values(&self) -> &[String] {
        &self.raw_values
    }

    /// Raw values with duplicates removed, first occurrence wins
    pub fn unique_values(&self) -> &[String] {
        &self.unique_values
    }
}

/// Occurrence count of one value across every record's raw values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalStat {
    pub value: String,
    pub count: usize,
}

impl GlobalStat {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}
