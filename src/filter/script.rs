//! Client-side filter script embedded in HTML reports
//!
//! The functions below apply the same rules as [`TermFilter`](super::TermFilter)
//! and [`OccurrenceFilter`](super::OccurrenceFilter) to the report's DOM:
//! the separator pattern is injected from [`SEPARATOR_PATTERN`] and counts are
//! read with `parseInt(t, 10)`, the leading-integer rule used by the Rust side.

use super::SEPARATOR_PATTERN;

const SEPARATOR_PLACEHOLDER: &str = "__SEPARATOR__";

const SCRIPT_TEMPLATE: &str = r#"
        const SEPARATOR = /__SEPARATOR__/;

        function parseTerms(query) {
            return query.split(SEPARATOR).map(t => t.trim().toLowerCase()).filter(t => t !== '');
        }

        function parseCounts(query) {
            return query.split(SEPARATOR).map(t => parseInt(t.trim(), 10)).filter(t => !isNaN(t));
        }

        function matchesTerms(terms, field) {
            const lower = field.toLowerCase();
            return terms.length === 0 || terms.some(term => lower.includes(term));
        }

        function matchesCounts(counts, count) {
            return counts.length === 0 || counts.includes(count);
        }

        function showTab(view) {
            const active = ['tab-active'];
            const showDrops = view === 'drops';
            document.getElementById('drops-view').classList.toggle('hidden', !showDrops);
            document.getElementById('stats-view').classList.toggle('hidden', showDrops);
            document.getElementById('btn-drops').classList.toggle(...active, showDrops);
            document.getElementById('btn-stats').classList.toggle(...active, !showDrops);
        }

        function applyAllFilters() {
            const terms = parseTerms(document.getElementById('stats-search').value);
            const counts = parseCounts(document.getElementById('occ-search').value);

            let visibleCount = 0;
            document.querySelectorAll('.stats-row').forEach(row => {
                const value = row.querySelector('.value-cell').textContent;
                const count = parseInt(row.getAttribute('data-count'), 10);
                const visible = matchesTerms(terms, value) && matchesCounts(counts, count);
                row.classList.toggle('hidden', !visible);
                if (visible) visibleCount++;
            });
            document.getElementById('results-count').innerText = 'Showing ' + visibleCount + ' items';
            document.getElementById('no-matches').classList.toggle('hidden', visibleCount !== 0);

            document.querySelectorAll('.drop-card').forEach(card => {
                let cardVisible = 0;
                card.querySelectorAll('.drop-value').forEach(item => {
                    const visible = matchesTerms(terms, item.textContent);
                    item.classList.toggle('hidden', !visible);
                    if (visible) cardVisible++;
                });
                card.classList.toggle('hidden', terms.length !== 0 && cardVisible === 0);
            });
        }

        function visibleValues() {
            return Array.from(document.querySelectorAll('.stats-row:not(.hidden)')).map(row => ({
                value: row.querySelector('.value-cell').textContent.trim(),
                count: row.getAttribute('data-count'),
            }));
        }

        function copyValues() {
            const values = visibleValues();
            if (values.length === 0) return;
            navigator.clipboard.writeText(values.map(v => v.value).join('\n')).then(() => {
                const btn = document.getElementById('copy-btn');
                const label = btn.innerText;
                btn.innerText = 'Copied ' + values.length + ' values!';
                setTimeout(() => { btn.innerText = label; }, 2000);
            });
        }

        function csvField(value) {
            return /[",\r\n]/.test(value) ? '"' + value.replace(/"/g, '""') + '"' : value;
        }

        function exportStatsCsv() {
            const values = visibleValues();
            if (values.length === 0) return;
            let csv = 'IP Address/Value,Occurrences\n';
            values.forEach(v => { csv += csvField(v.value) + ',' + v.count + '\n'; });
            const blob = new Blob([csv], { type: 'text/csv;charset=utf-8;' });
            const url = URL.createObjectURL(blob);
            const a = document.createElement('a');
            a.href = url;
            a.download = 'ip_extractor_stats_export.csv';
            a.click();
            URL.revokeObjectURL(url);
        }
"#;

/// Build the report script with the shared separator pattern inlined
pub fn report_script() -> String {
    SCRIPT_TEMPLATE.replace(SEPARATOR_PLACEHOLDER, SEPARATOR_PATTERN)
}
