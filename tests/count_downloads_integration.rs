//! Integration tests for download counting against deterministic in-memory indexes

use chrono::NaiveDate;
use core::cell::Cell;
use ohno::app_err;
use release_tally::{
    CountOptions, Diagnostics, FileDescriptor, InvalidNameError, KnownNames, NameRegistry, ReleaseMetadata, ReleaseRecord, ReleaseSource,
    Releases, TallyError, by_two, count_downloads, normalize, tally_downloads,
};
use std::collections::HashMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An index holding a fixed set of releases for every package it is asked about
struct MemoryIndex {
    names: KnownNames,
    records: Vec<ReleaseRecord>,
}

impl MemoryIndex {
    fn new(records: Vec<ReleaseRecord>) -> Self {
        Self {
            names: ["Django", "Flask"].into_iter().collect(),
            records,
        }
    }
}

impl NameRegistry for MemoryIndex {
    fn canonical_name(&self, name: &str) -> Option<String> {
        self.names.canonical_name(name)
    }
}

impl ReleaseSource for MemoryIndex {
    fn release_info(&self, _package: &str) -> release_tally::Result<Releases<'_>> {
        Ok(Box::new(self.records.iter().cloned().map(Ok)))
    }
}

/// Counts diagnostic lines
#[derive(Default)]
struct CountingDiagnostics {
    calls: Cell<usize>,
}

impl Diagnostics for CountingDiagnostics {
    fn debug(&self, _message: &str) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn upload_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 10, 13).unwrap()
}

fn release(version: &str, files: &[(&str, u64)]) -> ReleaseRecord {
    ReleaseRecord::new(
        files.iter().map(|(name, downloads)| FileDescriptor::new(*name, *downloads, upload_date())).collect(),
        ReleaseMetadata::new(version),
    )
}

fn count(index: &MemoryIndex, options: &CountOptions) -> Result<u64, TallyError> {
    count_downloads(index, Some("fake package"), options, &CountingDiagnostics::default())
}

#[test]
fn test_normalize_absent_name() {
    assert_eq!(normalize(None, &KnownNames::new()).unwrap(), "none");
}

#[test]
fn test_normalize_uses_registered_casing() {
    let index = MemoryIndex::new(Vec::new());

    assert_eq!(normalize(Some("dJaNgO"), &index).unwrap(), "Django");
    assert_eq!(normalize(Some("fLaSk"), &index).unwrap(), "Flask");
}

#[test]
fn test_normalize_rejects_invalid_names() {
    let index = MemoryIndex::new(Vec::new());

    assert_eq!(normalize(Some("FAKEPACKAGE1@!"), &index).unwrap_err(), InvalidNameError::new("FAKEPACKAGE1@!"));
    assert_eq!(normalize(Some("1337INoscopeyou"), &index).unwrap_err(), InvalidNameError::new("1337INoscopeyou"));
}

#[test]
fn test_normalize_empty_and_padded() {
    let index = MemoryIndex::new(Vec::new());

    assert_eq!(normalize(Some(""), &index).unwrap(), "");
    assert_eq!(normalize(Some("   Flask   "), &index).unwrap(), "   Flask   ");
}

#[test]
fn test_by_two_empty() {
    assert_eq!(by_two(Vec::<&str>::new()).count(), 0);
}

#[test]
fn test_by_two_collects_to_map() {
    let map: HashMap<_, _> = by_two(["a", "1", "b", "2", "c", "3"]).collect();

    assert_eq!(map, HashMap::from([("a", "1"), ("b", "2"), ("c", "3")]));
}

#[test]
fn test_by_two_odd_length() {
    let pairs: Vec<_> = by_two(["a", "1", "b", "2", "c"]).collect();

    assert_eq!(pairs, [("a", "1"), ("b", "2")]);
    assert!(pairs.iter().all(|(key, _)| *key != "c"));
}

#[test]
fn test_no_releases_counts_zero() {
    init_logging();
    let index = MemoryIndex::new(Vec::new());

    assert_eq!(count(&index, &CountOptions::default()).unwrap(), 0);
}

#[test]
fn test_single_file() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1)])]);

    assert_eq!(count(&index, &CountOptions::default()).unwrap(), 1);
}

#[test]
fn test_two_files() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1), ("fake package two", 2)])]);

    assert_eq!(count(&index, &CountOptions::default()).unwrap(), 3);
}

#[test]
fn test_unmatched_version_counts_zero() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1)])]);

    assert_eq!(count(&index, &CountOptions::default().with_version("1.1")).unwrap(), 0);
    assert_eq!(count(&index, &CountOptions::default().with_version("1.0")).unwrap(), 1);
}

#[test]
fn test_filename_pattern() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1)])]);

    assert_eq!(count(&index, &CountOptions::default().with_pattern("real")).unwrap(), 0);
    assert_eq!(count(&index, &CountOptions::default().with_pattern("[Ff]ake")).unwrap(), 1);
}

#[test]
fn test_invalid_pattern() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1)])]);

    let err = count(&index, &CountOptions::default().with_pattern("[Ff")).unwrap_err();
    assert!(matches!(err, TallyError::InvalidPattern { .. }));
}

#[test]
fn test_verbose_reports_counted_files() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1), ("fake package two", 2)])]);
    let diagnostics = CountingDiagnostics::default();

    let total = count_downloads(&index, Some("fake package"), &CountOptions::default(), &diagnostics).unwrap();

    assert_eq!(total, 3);
    assert!(diagnostics.calls.get() >= 1);
}

#[test]
fn test_quiet_reports_nothing() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1), ("fake package two", 2)])]);
    let diagnostics = CountingDiagnostics::default();
    let options = CountOptions::default().with_verbose(false);

    let total = count_downloads(&index, Some("fake package"), &options, &diagnostics).unwrap();

    assert_eq!(total, 3);
    assert_eq!(diagnostics.calls.get(), 0);
}

#[test]
fn test_invalid_name_is_reported() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", 1)])]);

    let err = count_downloads(&index, Some("FAKEPACKAGE1@!"), &CountOptions::default(), &CountingDiagnostics::default()).unwrap_err();
    assert_eq!(err.to_string(), "'FAKEPACKAGE1@!' is not a valid package name");
}

#[test]
fn test_report_breakdown() {
    init_logging();
    let index = MemoryIndex::new(vec![
        release("1.0", &[("flask-1.0.tar.gz", 10)]),
        release("1.1", &[("flask-1.1.tar.gz", 20), ("flask-1.1-py3-none-any.whl", 30)]),
    ]);

    let report = tally_downloads(&index, Some("flask"), &CountOptions::default(), &CountingDiagnostics::default()).unwrap();

    assert_eq!(report.package(), "Flask");
    assert_eq!(report.total(), 60);
    assert_eq!(report.by_version()["1.1"], 50);
    assert_eq!(report.files()[0].filename, "flask-1.0.tar.gz");
}

/// An index whose listing breaks after the first release
struct FlakyIndex;

impl NameRegistry for FlakyIndex {
    fn canonical_name(&self, _name: &str) -> Option<String> {
        None
    }
}

impl ReleaseSource for FlakyIndex {
    fn release_info(&self, _package: &str) -> release_tally::Result<Releases<'_>> {
        let records = vec![Ok(release("1.0", &[("fake package", 1)])), Err(app_err!("service unavailable"))];
        Ok(Box::new(records.into_iter()))
    }
}

#[test]
fn test_source_errors_propagate() {
    init_logging();

    let err = count_downloads(&FlakyIndex, Some("fake package"), &CountOptions::default(), &CountingDiagnostics::default()).unwrap_err();

    assert!(err.as_source().is_some());
    assert!(err.to_string().contains("service unavailable"));
}

#[test]
fn test_total_beyond_u64_is_an_error() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", u64::MAX), ("fake package two", 1)])]);

    let err = count(&index, &CountOptions::default()).unwrap_err();

    assert!(matches!(err, TallyError::CountOverflow { .. }));
    assert!(err.as_source().is_none());
}

#[test]
fn test_total_of_exactly_u64_max() {
    init_logging();
    let index = MemoryIndex::new(vec![release("1.0", &[("fake package", u64::MAX - 1), ("fake package two", 1)])]);

    assert_eq!(count(&index, &CountOptions::default()).unwrap(), u64::MAX);
}
