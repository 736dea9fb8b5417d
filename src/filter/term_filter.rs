use super::split_query;

/// Case-insensitive substring filter, OR-combined across terms.
///
/// An empty term set matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermFilter {
    terms: Vec<String>,
}

impl TermFilter {
    pub fn parse(query: &str) -> Self {
        let terms = split_query(query)
            .map(str::to_lowercase)
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let field = field.to_lowercase();
        self.terms.iter().any(|term| field.contains(term.as_str()))
    }
}
