// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for junit-launch
//!
//! These tests load real surefire-style report directories and check the
//! ordering, status and timing the report view derives from them.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use junit_launch::{
    ExecutionStatus, LogLevel, ReportError, TestItemType, load, load_with, parse_suite,
};
use similar_asserts::assert_eq;
use std::path::{Path, PathBuf};

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures/reports")
}

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, h, m, s).unwrap()
}

fn suite_xml(name: &str, timestamp: &str, time: f64, tests: u32, failures: u32) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite id="7" name="{name}" package="org.acme" timestamp="{timestamp}" time="{time}" hostname="localhost" tests="{tests}" failures="{failures}" errors="0">
  <properties/>
  <testcase name="{name}_case" classname="org.acme.{name}" time="{time}"/>
  <system-out/>
  <system-err/>
</testsuite>"#
    )
}

fn write(dir: &Path, file: &str, content: &str) {
    std::fs::write(dir.join(file), content).expect("Failed to write report");
}

#[test]
fn test_load_fixture_directory() {
    let report = load(fixtures_dir()).expect("Should load fixtures");

    // README.txt is not a report
    assert_eq!(report.suites_count(), 3);
    assert_eq!(report.summary().skipped, 1);
    assert_eq!(report.summary().failed, 0);

    let names: Vec<String> = (0..report.suites_count())
        .map(|i| report.suite(i).name)
        .collect();
    assert_eq!(
        names,
        vec![
            "com.example.auth.LoginTest",
            "com.example.cart.CartTest",
            "com.example.search.IndexTest",
        ]
    );
}

#[test]
fn test_fixture_statuses() {
    let report = load(fixtures_dir()).expect("Should load fixtures");

    assert_eq!(report.suite_result(0).status, ExecutionStatus::Passed);
    assert_eq!(report.suite_result(1).status, ExecutionStatus::Failed);
    assert_eq!(report.suite_result(2).status, ExecutionStatus::Skipped);
    assert_eq!(report.test_case_count(2), 0);
}

#[test]
fn test_fixture_failure_logs() {
    let report = load(fixtures_dir()).expect("Should load fixtures");

    assert_eq!(report.test_case_count(1), 3);
    assert!(!report.has_test_case_failure(1, 0));
    assert!(report.has_test_case_failure(1, 1));
    assert_eq!(report.test_case_result(1, 1).status, ExecutionStatus::Failed);

    let message = report.test_case_failure(1, 1);
    assert_eq!(message.level, LogLevel::Error);
    assert_eq!(message.message, "expected:<0> but was:<1>");
    assert_eq!(message.time, at(10, 5, 1) + TimeDelta::milliseconds(500));

    let details = report.test_case_failure_details(1, 1);
    assert_eq!(details.level, LogLevel::Info);
    assert!(details.message.starts_with("java.lang.AssertionError"));
    assert!(details.message.contains("CartTest.java:57"));

    let cart = &report.suites()[1];
    assert_eq!(cart.system_out, "cart service started on port 8080");
    assert_eq!(cart.hostname, "ci-runner-1");
}

#[test]
fn test_fixture_launch_times() {
    let report = load(fixtures_dir()).expect("Should load fixtures");
    assert_eq!(report.launch_start_time(), at(10, 0, 0));
    assert_eq!(report.launch_end_time(), at(10, 7, 30));
}

#[test]
fn test_suites_sorted_regardless_of_file_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    // File names sort opposite to start times
    write(dir.path(), "a.xml", &suite_xml("Late", "2023-01-01T12:00:00", 1.0, 1, 0));
    write(dir.path(), "b.xml", &suite_xml("Middle", "2023-01-01T11:00:00", 1.0, 1, 0));
    write(dir.path(), "c.xml", &suite_xml("Early", "2023-01-01T09:00:00", 1.0, 1, 0));

    let report = load(dir.path()).expect("load");
    assert_eq!(report.suites_count(), 3);

    let starts: Vec<DateTime<Utc>> = report.suites().iter().map(|s| s.start).collect();
    assert_eq!(starts, vec![at(9, 0, 0), at(11, 0, 0), at(12, 0, 0)]);
    assert_eq!(report.suite(0).name, "org.acme.Early");
}

#[test]
fn test_non_xml_files_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "suite.xml", &suite_xml("Only", "2023-01-01T10:00:00", 1.0, 1, 0));
    write(dir.path(), "suite.txt", &suite_xml("Text", "2023-01-01T10:00:00", 1.0, 1, 0));

    let report = load(dir.path()).expect("load");
    assert_eq!(report.suites_count(), 1);
}

#[test]
fn test_malformed_file_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "good.xml", &suite_xml("Good", "2023-01-01T10:00:00", 1.0, 1, 0));
    write(
        dir.path(),
        "bad.xml",
        r#"<testsuite name="Bad"><testcase name="x"></testsuite>"#,
    );

    let report = load(dir.path()).expect("A corrupt file must not fail the load");
    assert_eq!(report.suites_count(), 1);
    assert_eq!(report.summary().failed, 1);
    assert_eq!(report.suite(0).name, "org.acme.Good");
}

#[test]
fn test_empty_directory_loads_empty_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = load(dir.path()).expect("load");
    assert!(report.is_empty());
    assert_eq!(report.suites_count(), 0);
}

#[test]
fn test_empty_path_is_missing_directory() {
    let result = load("");
    assert!(matches!(result, Err(ReportError::MissingDirectory)));
}

#[test]
fn test_nonexistent_directory_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");
    match load(&missing) {
        Err(ReportError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_suite_status_from_counters() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "skipped.xml", &suite_xml("Skipped", "2023-01-01T10:00:00", 1.0, 0, 3));
    write(dir.path(), "passed.xml", &suite_xml("Passed", "2023-01-01T10:01:00", 1.0, 5, 0));
    write(dir.path(), "failed.xml", &suite_xml("Failed", "2023-01-01T10:02:00", 1.0, 5, 1));

    let report = load(dir.path()).expect("load");
    assert_eq!(report.suite_result(0).status, ExecutionStatus::Skipped);
    assert_eq!(report.suite_result(1).status, ExecutionStatus::Passed);
    assert_eq!(report.suite_result(2).status, ExecutionStatus::Failed);
}

#[test]
fn test_case_end_time_is_suite_start_plus_case_time() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "s.xml", &suite_xml("Timed", "2023-01-01T10:00:00", 1.5, 1, 0));

    let report = load(dir.path()).expect("load");
    let item = report.test_case(0, 0);
    assert_eq!(item.item_type, TestItemType::Step);
    assert_eq!(item.start_time, at(10, 0, 0));

    let result = report.test_case_result(0, 0);
    assert_eq!(result.end_time, at(10, 0, 1) + TimeDelta::milliseconds(500));
    assert_eq!(result.end_time.to_rfc3339(), "2023-01-01T10:00:01.500+00:00");
}

#[test]
fn test_launch_end_uses_last_suite_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    // The first suite runs for an hour, well past the short last suite
    write(dir.path(), "long.xml", &suite_xml("Long", "2023-01-01T10:00:00", 3600.0, 1, 0));
    write(dir.path(), "short.xml", &suite_xml("Short", "2023-01-01T10:05:00", 2.0, 1, 0));

    let report = load(dir.path()).expect("load");
    assert_eq!(report.launch_end_time(), at(10, 5, 2));
    assert!(report.suite_result(0).end_time > report.launch_end_time());
}

#[test]
fn test_malformed_timestamp_sorts_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "ok.xml", &suite_xml("Dated", "2023-01-01T10:00:00", 1.0, 1, 0));
    write(dir.path(), "odd.xml", &suite_xml("Undated", "not-a-date", 1.0, 1, 0));

    let report = load(dir.path()).expect("load");
    assert_eq!(report.suites_count(), 2);
    assert_eq!(report.suite(0).name, "org.acme.Undated");
    assert_eq!(report.launch_start_time(), DateTime::UNIX_EPOCH);
}

#[test]
fn test_diagnostics_are_injected() {
    #[derive(Default)]
    struct Counter {
        debug: usize,
        error: usize,
    }

    impl junit_launch::Diagnostics for Counter {
        fn debug(&mut self, _message: &str) {
            self.debug += 1;
        }

        fn error(&mut self, _message: &str) {
            self.error += 1;
        }
    }

    let mut counter = Counter::default();
    let report = load_with(fixtures_dir(), &mut counter).expect("load");
    assert_eq!(report.suites_count(), 3);
    assert_eq!(counter.debug, 1);
    assert_eq!(counter.error, 0);
}

#[test]
fn test_parse_suite_from_bytes() {
    let bytes = std::fs::read(fixtures_dir().join("TEST-com.example.auth.LoginTest.xml"))
        .expect("Failed to read fixture");
    let suite = parse_suite(&bytes).expect("Should parse");
    assert_eq!(suite.full_name(), "com.example.auth.LoginTest");
    assert_eq!(suite.cases.len(), 2);
    assert_eq!(suite.end(), at(10, 0, 2) + TimeDelta::milliseconds(500));
}

#[test]
fn test_report_items_serialize() {
    let report = load(fixtures_dir()).expect("Should load fixtures");
    let json = serde_json::to_value(report.suite(0)).expect("serialize");
    assert_eq!(json["type"], "SUITE");
    assert_eq!(json["description"], "suite 1");

    let json = serde_json::to_value(report.suite_result(2)).expect("serialize");
    assert_eq!(json["status"], "SKIPPED");

    let json = serde_json::to_value(&report.suites()[0]).expect("serialize");
    assert_eq!(json["duration_ms"], 2500);
}
