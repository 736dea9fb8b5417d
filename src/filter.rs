//! Filter engine for drops and global stats
//!
//! Two independent predicates, both parsed from free text typed by the user:
//! - [`TermFilter`]: case-insensitive substring match against any term
//! - [`OccurrenceFilter`]: exact match of a stat's count against any integer
//!
//! The same rules drive the terminal views, the headless CLI and the
//! script embedded in exported HTML reports (see [`script`]).

mod occurrence_filter;
pub mod script;
mod term_filter;
mod views;

pub use occurrence_filter::OccurrenceFilter;
pub use term_filter::TermFilter;
pub use views::{DropView, FilterQuery, filter_drops, filter_stats, sort_by_count_desc};

/// Separator pattern shared with the report script: runs of whitespace
/// (newlines included) and commas
pub const SEPARATOR_PATTERN: &str = r"[\s,]+";

/// One character of [`SEPARATOR_PATTERN`] as the report's JavaScript reads
/// it. JS `\s` differs from Unicode White_Space on two code points: it
/// includes U+FEFF and excludes U+0085.
pub fn is_separator(c: char) -> bool {
    match c {
        ',' | '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Split a filter query into its non-empty pieces
pub fn split_query(query: &str) -> impl Iterator<Item = &str> {
    query.split(is_separator).filter(|piece| !piece.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    #[test]
    fn test_split_query_mixed_separators() {
        let pieces: Vec<&str> = split_query(" 10.0.0.1,10.0.0.2\n\n 8.8.8.8 ,, ").collect();
        assert_eq!(pieces, vec!["10.0.0.1", "10.0.0.2", "8.8.8.8"]);
    }

    #[test]
    fn test_split_query_empty() {
        assert_eq!(split_query("").count(), 0);
        assert_eq!(split_query(" ,\n\t, ").count(), 0);
    }

    #[test]
    fn test_split_follows_js_whitespace() {
        let pieces: Vec<&str> = split_query("a\u{85}b\u{FEFF}c\u{A0}d\u{2028}e").collect();
        assert_eq!(pieces, vec!["a\u{85}b", "c", "d", "e"]);
    }

    /// ECMAScript `[\s,]+`: WhiteSpace, LineTerminator and the comma
    const JS_SEPARATOR_PATTERN: &str = "[\t\n\u{0B}\u{0C}\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF},]+";

    // The Rust splitter and the report script's pattern agree on every query
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_split_matches_js_separator_set(
            query in "[a-c0-9., \t\n\r\u{0B}\u{0C}\u{85}\u{A0}\u{2003}\u{2028}\u{3000}\u{FEFF}]{0,30}"
        ) {
            let re = Regex::new(JS_SEPARATOR_PATTERN).unwrap();
            let expected: Vec<&str> = re.split(&query).filter(|p| !p.is_empty()).collect();
            let actual: Vec<&str> = split_query(&query).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
