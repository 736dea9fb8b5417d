//! Tests for app_state

use super::*;
use crate::config::SummaryConfig;
use crate::summary::SummaryStatus;
use crate::test_utils::test_helpers::{SAMPLE_LOG, test_app};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_text_builds_dataset() {
    let app = test_app(SAMPLE_LOG);
    assert_eq!(app.dataset.drops().len(), 2);
    assert_eq!(app.dataset.stats().len(), 4);
    assert_eq!(app.dataset.source_name(), "firewall_logs.txt");
}

#[test]
fn test_load_text_swaps_dataset() {
    let mut app = test_app(SAMPLE_LOG);
    let before = Arc::clone(&app.dataset);
    app.scroll.update_bounds(100, 10);
    app.scroll.offset = 7;

    app.load_text("DROP 9: 23:59\n1.1.1.1");

    assert_eq!(before.drops().len(), 2);
    assert_eq!(app.dataset.drops().len(), 1);
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_visible_values_drops_view() {
    let app = test_app(SAMPLE_LOG);
    assert_eq!(
        app.visible_values(),
        vec!["192.168.1.1", "10.0.0.5", "8.8.8.8", "192.168.1.1", "8.8.4.4"]
    );
}

#[test]
fn test_visible_values_stats_view_sorted() {
    let mut app = test_app(SAMPLE_LOG);
    app.view = ViewMode::Stats;
    assert_eq!(
        app.visible_values(),
        vec!["192.168.1.1", "10.0.0.5", "8.8.8.8", "8.8.4.4"]
    );
}

#[test]
fn test_occurrence_filter_ignored_in_drops_view() {
    let mut app = test_app(SAMPLE_LOG);
    app.filters.occurrences.insert_str("3");
    assert_eq!(app.visible_values().len(), 5);
}

#[test]
fn test_loader_result_replaces_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edge.log");
    std::fs::write(&path, SAMPLE_LOG).unwrap();

    let source = InputSource::File(path);
    let loader = source.spawn_loader();
    let mut app = App::new_with_loader(source, loader, &Config::default());
    assert!(app.is_loading());

    for _ in 0..200 {
        app.poll_file_loader();
        if !app.is_loading() {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    assert!(app.file_loader.is_none());
    assert_eq!(app.dataset.drops().len(), 2);
    assert_eq!(app.dataset.source_name(), "edge.log");
}

#[test]
fn test_loader_error_shows_notification() {
    let source = InputSource::File(PathBuf::from("/nonexistent/drops.txt"));
    let loader = source.spawn_loader();
    let mut app = App::new_with_loader(source, loader, &Config::default());

    for _ in 0..200 {
        app.poll_file_loader();
        if app.file_loader.is_none() {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    assert!(
        app.notification
            .current_message()
            .is_some_and(|m| m.starts_with("Failed to load input"))
    );
    assert!(app.dataset.is_empty());
}

#[test]
fn test_reload_from_stdin_warns() {
    let mut app = App::new(InputSource::Stdin, &Config::default());
    app.reload();
    assert_eq!(
        app.notification.current_message(),
        Some("Cannot reload from stdin")
    );
    assert!(app.file_loader.is_none());
}

#[test]
fn test_export_csv_writes_filtered_stats() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(SAMPLE_LOG);
    app.export_dir = dir.path().to_path_buf();
    app.filters.terms.insert_str("8.8");

    app.export_csv();

    let csv = std::fs::read_to_string(dir.path().join("ip_extractor_stats_export.csv")).unwrap();
    assert_eq!(csv, "IP Address/Value,Occurrences\n8.8.8.8,1\n8.8.4.4,1\n");
    assert!(
        app.notification
            .current_message()
            .is_some_and(|m| m.starts_with("Exported 2 values"))
    );
}

#[test]
fn test_export_csv_empty_selection_warns() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(SAMPLE_LOG);
    app.export_dir = dir.path().to_path_buf();
    app.filters.terms.insert_str("nothing");

    app.export_csv();

    assert_eq!(app.notification.current_message(), Some("Nothing to export"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_report_named_after_source() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(SAMPLE_LOG);
    app.export_dir = dir.path().to_path_buf();

    app.export_report();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("firewall_report_"));
    assert!(names[0].ends_with(".html"));
}

#[test]
fn test_export_failure_is_error_notification() {
    let mut app = test_app(SAMPLE_LOG);
    app.export_dir = PathBuf::from("/nonexistent/dir");
    app.export_csv();
    assert_eq!(
        app.notification.current_type(),
        Some(crate::notification::NotificationType::Error)
    );
}

#[test]
fn test_summary_enabled_without_key_warns() {
    let mut config = Config::default();
    config.summary = SummaryConfig {
        enabled: true,
        api_key: Some("   ".to_string()),
        ..SummaryConfig::default()
    };
    let mut app = App::new(InputSource::Stdin, &config);
    app.load_text(SAMPLE_LOG);

    app.request_summary();

    assert!(!app.summary.visible);
    assert!(
        app.notification
            .current_message()
            .is_some_and(|m| m.starts_with("No API key"))
    );
}

#[test]
fn test_summary_request_sent_to_worker() {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (_response_tx, response_rx) = std::sync::mpsc::channel();
    let mut app = test_app(SAMPLE_LOG);
    app.summary_config.enabled = true;
    app.summary.set_channels(request_tx, response_rx);

    app.toggle_summary();

    assert!(app.summary.visible);
    assert_eq!(app.summary.status, SummaryStatus::Pending);
    let crate::summary::SummaryRequest::Generate { prompt, .. } = request_rx.try_recv().unwrap();
    assert!(prompt.contains("\"totalDrops\":2"));
    assert!(prompt.contains("\"totalUniqueIps\":4"));

    app.toggle_summary();
    assert!(!app.summary.visible);
    assert!(!app.summary.is_pending());
}

#[test]
fn test_summary_on_empty_dataset_warns() {
    let (request_tx, _request_rx) = std::sync::mpsc::channel();
    let (_response_tx, response_rx) = std::sync::mpsc::channel();
    let mut app = test_app("");
    app.summary_config.enabled = true;
    app.summary.set_channels(request_tx, response_rx);

    app.request_summary();

    assert!(!app.summary.visible);
    assert_eq!(
        app.notification.current_message(),
        Some("No DROP records to summarize")
    );
}

#[test]
fn test_new_dataset_closes_summary() {
    let mut app = test_app(SAMPLE_LOG);
    app.summary.visible = true;
    app.load_text(SAMPLE_LOG);
    assert!(!app.summary.visible);
}
