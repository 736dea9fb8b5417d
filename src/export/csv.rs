use std::borrow::Cow;

use crate::drops::GlobalStat;

pub const CSV_HEADER: &str = "IP Address/Value,Occurrences";
pub const CSV_FILE_NAME: &str = "ip_extractor_stats_export.csv";

/// Quote a field only when it holds a comma, quote or line break
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Header plus one `value,count` line per stat, in the given order
pub fn to_csv(stats: &[&GlobalStat]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + stats.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for stat in stats {
        out.push_str(&csv_field(&stat.value));
        out.push(',');
        out.push_str(&stat.count.to_string());
        out.push('\n');
    }
    out
}
