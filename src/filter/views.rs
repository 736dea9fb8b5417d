//! Filtered views over a dataset
//!
//! Every call re-evaluates from scratch; nothing is cached between edits.

use super::{OccurrenceFilter, TermFilter};
use crate::drops::{DropRecord, GlobalStat};

/// Both predicates parsed from the two filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub terms: TermFilter,
    pub occurrences: OccurrenceFilter,
}

impl FilterQuery {
    pub fn parse(term_query: &str, occurrence_query: &str) -> Self {
        Self {
            terms: TermFilter::parse(term_query),
            occurrences: OccurrenceFilter::parse(occurrence_query),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.occurrences.is_empty()
    }
}

/// A record as shown in the drops view, with only its matching values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropView<'a> {
    pub record: &'a DropRecord,
    pub values: Vec<&'a str>,
}

/// Stable sort by count, highest first. Equal counts keep their order.
pub fn sort_by_count_desc(stats: &mut [&GlobalStat]) {
    stats.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Stats passing both filters, sorted by count descending
pub fn filter_stats<'a>(stats: &'a [GlobalStat], query: &FilterQuery) -> Vec<&'a GlobalStat> {
    let mut visible: Vec<&GlobalStat> = stats
        .iter()
        .filter(|stat| query.occurrences.matches(stat.count) && query.terms.matches(&stat.value))
        .collect();
    sort_by_count_desc(&mut visible);
    visible
}

/// Records with their unique values narrowed by the term filter.
///
/// With terms present, a record with no matching value is left out
/// entirely. Without terms every record is returned unmodified.
pub fn filter_drops<'a>(drops: &'a [DropRecord], terms: &TermFilter) -> Vec<DropView<'a>> {
    drops
        .iter()
        .filter_map(|record| {
            let values: Vec<&str> = record
                .unique_values()
                .iter()
                .map(String::as_str)
                .filter(|value| terms.matches(value))
                .collect();

            if !terms.is_empty() && values.is_empty() {
                return None;
            }
            Some(DropView { record, values })
        })
        .collect()
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod views_tests;
