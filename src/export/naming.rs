use chrono::NaiveDateTime;

const FALLBACK_WORD: &str = "Report";

/// First word of the source name: extension stripped, then split on
/// whitespace, `_` or `-`. Falls back to `Report` (stdin, dotfiles, ...).
pub fn first_word(source_name: &str) -> String {
    let stem = match source_name.rfind('.') {
        Some(idx) if idx + 1 < source_name.len() && !source_name[idx..].contains('/') => {
            &source_name[..idx]
        }
        _ => source_name,
    };

    stem.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .next()
        .filter(|word| !word.is_empty())
        .unwrap_or(FALLBACK_WORD)
        .to_string()
}

/// `{first_word}_report_{dd.mm.yyyy}.html`
pub fn report_file_name(source_name: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "{}_report_{}.html",
        first_word(source_name),
        generated_at.format("%d.%m.%Y")
    )
}

/// `dd/mm/yyyy HH:MM:SS`, as shown in the report subtitle
pub fn generated_timestamp(generated_at: NaiveDateTime) -> String {
    generated_at.format("%d/%m/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, m: u32, y: i32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_first_word_splits_on_separators() {
        assert_eq!(first_word("firewall_logs.txt"), "firewall");
        assert_eq!(first_word("edge-01 dump.log"), "edge");
        assert_eq!(first_word("Weekly report.txt"), "Weekly");
    }

    #[test]
    fn test_first_word_strips_only_last_extension() {
        assert_eq!(first_word("archive.tar.gz"), "archive.tar");
        assert_eq!(first_word("noext"), "noext");
    }

    #[test]
    fn test_first_word_fallback() {
        assert_eq!(first_word(""), "Report");
        assert_eq!(first_word(".log"), "Report");
        assert_eq!(first_word("_leading.txt"), "Report");
    }

    #[test]
    fn test_report_file_name_pads_date() {
        assert_eq!(
            report_file_name("drops.txt", at(5, 1, 2026, 8, 0, 0)),
            "drops_report_05.01.2026.html"
        );
    }

    #[test]
    fn test_generated_timestamp_format() {
        assert_eq!(
            generated_timestamp(at(9, 11, 2025, 7, 3, 4)),
            "09/11/2025 07:03:04"
        );
    }
}
