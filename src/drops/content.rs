//! Content line cleaning for lines inside an open DROP section

/// Clean a trimmed content line and decide whether it is kept.
///
/// Every `'` and `"` is removed. The cleaned line is rejected when it is
/// empty, has no ASCII alphanumeric character, is made only of `.`, `-`,
/// `*` and whitespace, or contains `...` anywhere.
pub fn clean_content_line(line: &str) -> Option<String> {
    let cleaned: String = line.chars().filter(|c| !matches!(c, '\'' | '"')).collect();

    if cleaned.is_empty() {
        return None;
    }

    if !cleaned.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    if is_separator(&cleaned) {
        return None;
    }

    if cleaned.contains("...") {
        return None;
    }

    Some(cleaned)
}

fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '.' | '-' | '*') || c.is_whitespace())
}
