//! DROP section header matching

use std::sync::LazyLock;

use regex::Regex;

/// `DROP <id> : <h:mm>` anywhere in the line, case-insensitive keyword
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)DROP\s+([0-9]+)\s*:\s*([0-9]{1,2}:[0-9]{2})")
        .expect("header pattern is a valid regex")
});

/// Identifier and clock token captured from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropHeader {
    pub id: String,
    pub time: String,
}

/// Test a trimmed line against the header pattern.
///
/// The pattern is matched as a substring, so text before or after the
/// header does not prevent a match.
pub fn match_header(line: &str) -> Option<DropHeader> {
    let captures = HEADER_RE.captures(line)?;
    Some(DropHeader {
        id: captures[1].to_string(),
        time: captures[2].to_string(),
    })
}
