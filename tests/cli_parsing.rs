//! Tests for command-line parsing and its mapping onto `Config`.

use std::path::PathBuf;

use clap::Parser;
use sitemap_finder::config::{DEFAULT_PROBE_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use sitemap_finder::{Config, EntryFilter, LogFormat, LogLevel, Opt};

#[test]
fn test_cli_single_target_defaults() {
    let opt = Opt::try_parse_from(["sitemap_finder", "example.com"]).expect("Should parse");
    assert_eq!(opt.target.as_deref(), Some("example.com"));
    assert!(opt.input.is_none());
    assert_eq!(opt.column, 1);

    let config = Config::from(&opt);
    assert!(!config.collect_pages);
    assert!(!config.expand_nested_indexes);
    assert_eq!(config.entry_filter, EntryFilter::Substring);
    assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.probe_concurrency, DEFAULT_PROBE_CONCURRENCY);
    assert!(config.archive_dir.is_none());
    // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match config.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
}

#[test]
fn test_cli_no_target_is_allowed() {
    let opt = Opt::try_parse_from(["sitemap_finder"]).expect("Should parse without target");
    assert!(opt.target.is_none());
    assert!(opt.input.is_none());
}

#[test]
fn test_cli_batch_csv_options() {
    let opt = Opt::try_parse_from([
        "sitemap_finder",
        "--input",
        "websites.csv",
        "--column",
        "0",
        "--has-header",
    ])
    .expect("Should parse batch options");
    assert_eq!(opt.input, Some(PathBuf::from("websites.csv")));
    assert_eq!(opt.column, 0);
    assert!(opt.has_header);
}

#[test]
fn test_cli_target_conflicts_with_input() {
    let result = Opt::try_parse_from(["sitemap_finder", "example.com", "--input", "list.txt"]);
    assert!(result.is_err(), "TARGET and --input are mutually exclusive");
}

#[test]
fn test_cli_archive_defaults_and_implies_pages() {
    let opt = Opt::try_parse_from(["sitemap_finder", "example.com", "--archive"])
        .expect("Should parse --archive");
    let config = Config::from(&opt);
    assert_eq!(config.archive_dir, Some(PathBuf::from("results")));
    assert!(config.collect_pages);

    let opt = Opt::try_parse_from(["sitemap_finder", "--archive-dir", "out", "example.com"])
        .expect("Should parse --archive-dir with value");
    assert_eq!(opt.target.as_deref(), Some("example.com"));
    assert_eq!(Config::from(&opt).archive_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_cli_page_options() {
    let opt = Opt::try_parse_from([
        "sitemap_finder",
        "example.com",
        "--expand-nested-indexes",
        "--entry-filter",
        "document-type",
        "--dedupe-pages",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse page options");
    let config = Config::from(&opt);
    assert!(config.collect_pages);
    assert!(config.expand_nested_indexes);
    assert!(config.dedupe_pages);
    assert_eq!(config.entry_filter, EntryFilter::DocumentType);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    match config.log_format {
        LogFormat::Json => {}
        _ => panic!("Should be Json format"),
    }
}

#[test]
fn test_cli_invalid_entry_filter_rejected() {
    let result = Opt::try_parse_from(["sitemap_finder", "example.com", "--entry-filter", "regex"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_zero_concurrency_floored() {
    let opt = Opt::try_parse_from(["sitemap_finder", "example.com", "--probe-concurrency", "0"])
        .expect("Should parse");
    assert_eq!(Config::from(&opt).probe_concurrency, 1);
}
