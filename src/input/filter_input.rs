use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::filter::FilterQuery;
use crate::theme;

const TERMS_PLACEHOLDER: &str = "Paste IPs to search...";
const OCCURRENCES_PLACEHOLDER: &str = "e.g. 1, 3, 5";

fn create_filter_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea
}

/// The two free-text filter fields
pub struct FilterInputs {
    pub terms: TextArea<'static>,
    pub occurrences: TextArea<'static>,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterInputs {
    pub fn new() -> Self {
        Self {
            terms: create_filter_textarea(TERMS_PLACEHOLDER),
            occurrences: create_filter_textarea(OCCURRENCES_PLACEHOLDER),
        }
    }

    /// Full term text; pasted lists keep their line breaks
    pub fn term_text(&self) -> String {
        self.terms.lines().join("\n")
    }

    pub fn occurrence_text(&self) -> String {
        self.occurrences.lines().join("\n")
    }

    /// Parsed fresh on every call
    pub fn query(&self) -> FilterQuery {
        FilterQuery::parse(&self.term_text(), &self.occurrence_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_give_empty_query() {
        let inputs = FilterInputs::new();
        assert_eq!(inputs.term_text(), "");
        assert!(inputs.query().is_empty());
    }

    #[test]
    fn test_multiline_paste_is_split() {
        let mut inputs = FilterInputs::new();
        inputs.terms.insert_str("10.0.0.1\n10.0.0.2");
        assert_eq!(inputs.term_text(), "10.0.0.1\n10.0.0.2");
        assert_eq!(inputs.query().terms.terms(), &["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_occurrences_parsed() {
        let mut inputs = FilterInputs::new();
        inputs.occurrences.insert_str("1, 3");
        assert_eq!(inputs.query().occurrences.counts(), &[1, 3]);
    }
}
