use super::split_query;

/// Exact-count filter, OR-combined across the listed integers.
///
/// An empty integer set matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccurrenceFilter {
    counts: Vec<i64>,
}

impl OccurrenceFilter {
    /// Parse a query such as `"1, 3 5"`; pieces without leading digits are ignored
    pub fn parse(query: &str) -> Self {
        let counts = split_query(query)
            .filter_map(parse_leading_int)
            .collect();
        Self { counts }
    }

    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn matches(&self, count: usize) -> bool {
        if self.counts.is_empty() {
            return true;
        }
        i64::try_from(count).is_ok_and(|count| self.counts.contains(&count))
    }
}

/// Leading-integer parse: optional sign, then ASCII digits up to the first
/// non-digit. `"12abc"` is 12, `"abc"` has no value. Digit runs beyond the
/// `i64` range saturate; like `parseInt`, they are numbers that match no count.
///
/// Mirrors `parseInt(piece, 10)` in the report script.
fn parse_leading_int(piece: &str) -> Option<i64> {
    let (negative, rest) = match piece.as_bytes().first() {
        Some(b'-') => (true, &piece[1..]),
        Some(b'+') => (false, &piece[1..]),
        _ => (false, piece),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    // Only overflow can fail here: the slice is a non-empty digit run
    Some(match rest[..digits_len].parse::<i64>() {
        Ok(magnitude) if negative => -magnitude,
        Ok(magnitude) => magnitude,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    })
}
