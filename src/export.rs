//! Writing filtered stats and full reports to disk
//!
//! Nothing is written for an empty selection: CSV export needs at least one
//! visible stat and a report needs at least one record. Callers get `None`
//! back in that case and decide how to tell the user.

mod csv;
mod html;
mod naming;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::drops::{Dataset, GlobalStat};
use crate::error::DroplensError;

pub use csv::{CSV_FILE_NAME, CSV_HEADER, csv_field, to_csv};
pub use html::{html_escape, render_report};
pub use naming::{first_word, generated_timestamp, report_file_name};

/// Write `stats` as CSV to an explicit path. Returns false when empty.
pub fn write_csv(path: &Path, stats: &[&GlobalStat]) -> Result<bool, DroplensError> {
    if stats.is_empty() {
        return Ok(false);
    }
    write_file(path, &to_csv(stats))?;
    log::debug!("Exported {} stats to {}", stats.len(), path.display());
    Ok(true)
}

/// Write `stats` to the fixed export file name inside `dir`
pub fn export_csv(dir: &Path, stats: &[&GlobalStat]) -> Result<Option<PathBuf>, DroplensError> {
    let path = dir.join(CSV_FILE_NAME);
    Ok(write_csv(&path, stats)?.then_some(path))
}

/// Write the HTML report to an explicit path. Returns false for an empty dataset.
pub fn write_report(
    path: &Path,
    dataset: &Dataset,
    generated_at: NaiveDateTime,
) -> Result<bool, DroplensError> {
    if dataset.is_empty() {
        return Ok(false);
    }
    write_file(path, &render_report(dataset, generated_at))?;
    log::debug!(
        "Wrote report for '{}' to {}",
        dataset.source_name(),
        path.display()
    );
    Ok(true)
}

/// Write the HTML report inside `dir`, named after the source and the date
pub fn export_report(
    dir: &Path,
    dataset: &Dataset,
    generated_at: NaiveDateTime,
) -> Result<Option<PathBuf>, DroplensError> {
    let path = dir.join(report_file_name(dataset.source_name(), generated_at));
    Ok(write_report(&path, dataset, generated_at)?.then_some(path))
}

fn write_file(path: &Path, contents: &str) -> Result<(), DroplensError> {
    std::fs::write(path, contents).map_err(|e| {
        log::error!("Export to {} failed: {}", path.display(), e);
        DroplensError::Export {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })
}
