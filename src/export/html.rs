//! Self-contained HTML report
//!
//! The page carries both views of the dataset, the two filter inputs and
//! the filter script, so it keeps working offline once saved.

use std::fmt::Write;

use chrono::NaiveDateTime;

use super::naming::{first_word, generated_timestamp};
use crate::drops::{Dataset, DropRecord, GlobalStat};
use crate::filter::script::report_script;
use crate::filter::{FilterQuery, filter_stats};

const STYLE: &str = r#"
        body { font-family: 'Inter', system-ui, sans-serif; background: #f8fafc; color: #0f172a; margin: 0; padding: 3rem 1rem; }
        .container { max-width: 72rem; margin: 0 auto; }
        header { text-align: center; margin-bottom: 3rem; }
        h1 { font-size: 2.25rem; font-weight: 800; margin: 0 0 .5rem; }
        h1 span { color: #4f46e5; }
        .subtitle { color: #64748b; font-size: 1.125rem; }
        .mono { font-family: 'JetBrains Mono', ui-monospace, monospace; }
        .tabs { display: flex; justify-content: center; gap: .5rem; margin-bottom: 2rem; }
        .tabs button { padding: .6rem 1.5rem; border: 1px solid #e2e8f0; border-radius: .75rem; background: #fff; color: #475569; font-weight: 600; cursor: pointer; }
        .tabs button.tab-active { background: #4f46e5; color: #fff; }
        .filters { display: grid; grid-template-columns: 2fr 1fr; gap: 1rem; margin-bottom: 1rem; }
        .filters label { display: block; font-size: .65rem; font-weight: 700; color: #94a3b8; text-transform: uppercase; letter-spacing: .05em; margin-bottom: .25rem; }
        .filters textarea { width: 100%; box-sizing: border-box; padding: .75rem; border: 1px solid #e2e8f0; border-radius: .5rem; resize: none; }
        .actions { display: flex; gap: .5rem; justify-content: flex-end; margin-bottom: 1rem; }
        .actions button { padding: .5rem 1rem; border-radius: .5rem; border: 1px solid #e2e8f0; background: #fff; font-weight: 700; font-size: .75rem; cursor: pointer; }
        .actions button.primary { background: #059669; color: #fff; border-color: #059669; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
        .drop-card { background: #fff; border: 1px solid #f1f5f9; border-radius: .75rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); overflow: hidden; }
        .drop-head { display: flex; justify-content: space-between; align-items: center; background: #f8fafc; padding: 1rem 1.5rem; border-bottom: 1px solid #f1f5f9; }
        .badge { background: #4f46e5; color: #fff; padding: .25rem .75rem; border-radius: 999px; font-size: .75rem; font-weight: 700; }
        .time { font-weight: 600; font-size: 1.125rem; margin-left: .75rem; }
        .items { color: #94a3b8; font-size: .75rem; }
        .drop-card ul { list-style: none; margin: 0; padding: 1rem; max-height: 13rem; overflow-y: auto; }
        .drop-card li { background: #f8fafc; padding: .5rem; margin-bottom: .5rem; border-radius: .25rem; font-size: .875rem; color: #475569; }
        .panel { background: #fff; border: 1px solid #f1f5f9; border-radius: .75rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); padding: 1.5rem; }
        table { width: 100%; border-collapse: collapse; }
        th { text-align: left; font-size: .65rem; text-transform: uppercase; color: #64748b; padding: 1rem 1.5rem; background: #f8fafc; }
        td { padding: 1rem 1.5rem; border-top: 1px solid #f1f5f9; }
        .count { text-align: right; font-weight: 700; color: #4338ca; }
        #results-count, #no-matches { color: #94a3b8; font-size: .75rem; padding: .25rem; }
        footer { margin-top: 6rem; padding-top: 2rem; border-top: 1px solid #f1f5f9; text-align: center; color: #94a3b8; font-size: .875rem; }
        .hidden { display: none !important; }
        @media print {
            .no-print { display: none !important; }
            #drops-view, #stats-view { display: block !important; }
        }
"#;

/// Escape text for use in element content and double-quoted attributes
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full report page for `dataset`
pub fn render_report(dataset: &Dataset, generated_at: NaiveDateTime) -> String {
    let word = html_escape(&first_word(dataset.source_name()));
    let stats = filter_stats(dataset.stats(), &FilterQuery::default());

    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Report IP Extractor - {word}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Report IP <span>Extractor</span></h1>
            <p class="subtitle">Analyzed report from {word} - Generated {timestamp}</p>
        </header>

        <div class="tabs no-print">
            <button id="btn-drops" class="tab-active" onclick="showTab('drops')">Drops List ({drop_count})</button>
            <button id="btn-stats" onclick="showTab('stats')">Global Stats ({stat_count})</button>
        </div>

        <div class="filters no-print">
            <div>
                <label for="stats-search">Search IPs / Values</label>
                <textarea id="stats-search" class="mono" rows="2" placeholder="Paste IPs to search..." oninput="applyAllFilters()"></textarea>
            </div>
            <div>
                <label for="occ-search">Exact Occurrences</label>
                <textarea id="occ-search" class="mono" rows="2" placeholder="e.g. 1, 3, 5" oninput="applyAllFilters()"></textarea>
            </div>
        </div>
"#,
        timestamp = generated_timestamp(generated_at),
        drop_count = dataset.drops().len(),
        stat_count = dataset.stats().len(),
    );

    page.push_str("\n        <div id=\"drops-view\">\n            <div class=\"grid\">");
    for record in dataset.drops() {
        push_drop_card(&mut page, record);
    }
    page.push_str("\n            </div>\n        </div>\n");

    push_stats_panel(&mut page, &stats);

    let _ = write!(
        page,
        r#"
        <footer>Generated by droplens</footer>
    </div>

    <script>{script}    </script>
</body>
</html>
"#,
        script = report_script(),
    );

    page
}

fn push_drop_card(page: &mut String, record: &DropRecord) {
    let _ = write!(
        page,
        r#"
                <div class="drop-card">
                    <div class="drop-head">
                        <div><span class="badge">DROP {id}</span><span class="time">{time}</span></div>
                        <div class="items">{items} Items</div>
                    </div>
                    <ul>"#,
        id = html_escape(record.id()),
        time = html_escape(record.time()),
        items = record.unique_values().len(),
    );
    for value in record.unique_values() {
        let _ = write!(
            page,
            "\n                        <li class=\"drop-value mono\">{}</li>",
            html_escape(value)
        );
    }
    page.push_str("\n                    </ul>\n                </div>");
}

fn push_stats_panel(page: &mut String, stats: &[&GlobalStat]) {
    let _ = write!(
        page,
        r#"
        <div id="stats-view" class="hidden">
            <div class="panel">
                <div class="actions no-print">
                    <button class="primary" onclick="exportStatsCsv()">Export CSV</button>
                    <button id="copy-btn" onclick="copyValues()">Copy IPs</button>
                </div>
                <div id="results-count" class="no-print">Showing {count} items</div>
                <table id="stats-table">
                    <thead>
                        <tr><th>IP Address / Value</th><th class="count">Occurrences</th></tr>
                    </thead>
                    <tbody id="stats-body">"#,
        count = stats.len(),
    );
    for stat in stats {
        let _ = write!(
            page,
            "\n                        <tr class=\"stats-row\" data-count=\"{count}\"><td class=\"value-cell mono\">{value}</td><td class=\"count\">{count}</td></tr>",
            count = stat.count,
            value = html_escape(&stat.value),
        );
    }
    page.push_str(
        r#"
                    </tbody>
                </table>
                <div id="no-matches" class="hidden">No matches found</div>
            </div>
        </div>
"#,
    );
}
