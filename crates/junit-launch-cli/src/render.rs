// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Launch rendering
//!
//! Walks a loaded [`XmlReport`] suite by suite and case by case and maps it
//! into a launch tree of test items, execution results and failure logs.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use junit_launch::{ExecutionResult, ExecutionStatus, LogMessage, TestItem, XmlReport};

/// A whole launch: every suite of one report directory
#[derive(Debug, Clone, Serialize)]
pub struct Launch {
    /// Launch name
    pub name: String,
    /// Start of the first suite, `None` for an empty launch
    pub start_time: Option<DateTime<Utc>>,
    /// End of the last suite, `None` for an empty launch
    pub end_time: Option<DateTime<Utc>>,
    /// Suites in start-time order
    pub suites: Vec<SuiteRecord>,
}

/// A suite item with its result and steps
#[derive(Debug, Clone, Serialize)]
pub struct SuiteRecord {
    /// The `SUITE` item
    pub item: TestItem,
    /// Suite outcome
    pub result: ExecutionResult,
    /// One step per test case, in document order
    pub steps: Vec<StepRecord>,
}

/// A test case item with its result and failure logs
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// The `STEP` item
    pub item: TestItem,
    /// Case outcome
    pub result: ExecutionResult,
    /// Failure message and details, empty for passing cases
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<LogMessage>,
}

impl Launch {
    /// Count suites with the given status
    #[must_use]
    pub fn count(&self, status: ExecutionStatus) -> usize {
        self.suites
            .iter()
            .filter(|s| s.result.status == status)
            .count()
    }
}

/// Build a launch from a loaded report
#[must_use]
pub fn build_launch(name: &str, report: &XmlReport) -> Launch {
    let suites = (0..report.suites_count())
        .map(|i| SuiteRecord {
            item: report.suite(i),
            result: report.suite_result(i),
            steps: (0..report.test_case_count(i))
                .map(|j| build_step(report, i, j))
                .collect(),
        })
        .collect();

    let (start_time, end_time) = if report.is_empty() {
        (None, None)
    } else {
        (
            Some(report.launch_start_time()),
            Some(report.launch_end_time()),
        )
    };

    Launch {
        name: name.to_string(),
        start_time,
        end_time,
        suites,
    }
}

fn build_step(report: &XmlReport, i: usize, j: usize) -> StepRecord {
    let logs = if report.has_test_case_failure(i, j) {
        vec![
            report.test_case_failure(i, j),
            report.test_case_failure_details(i, j),
        ]
    } else {
        Vec::new()
    };
    StepRecord {
        item: report.test_case(i, j),
        result: report.test_case_result(i, j),
        logs,
    }
}

/// Render a launch as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(launch: &Launch) -> serde_json::Result<String> {
    serde_json::to_string_pretty(launch)
}

/// Render a launch as a human-readable summary
#[must_use]
pub fn render_text(launch: &Launch) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Launch {}: {} suites ({} passed, {} failed, {} skipped)",
        launch.name,
        launch.suites.len(),
        launch.count(ExecutionStatus::Passed),
        launch.count(ExecutionStatus::Failed),
        launch.count(ExecutionStatus::Skipped),
    );
    if let (Some(start), Some(end)) = (launch.start_time, launch.end_time) {
        let _ = writeln!(out, "  {} .. {}", start.to_rfc3339(), end.to_rfc3339());
    }

    for suite in &launch.suites {
        let _ = writeln!(
            out,
            "  {:<8} {} ({} steps)",
            status_label(suite.result.status),
            suite.item.name,
            suite.steps.len()
        );
        for step in suite.steps.iter().filter(|s| !s.logs.is_empty()) {
            let message = step.logs.first().map_or("", |log| log.message.as_str());
            let _ = writeln!(out, "    FAILED   {}: {}", step.item.name, message);
        }
    }
    out
}

fn status_label(status: ExecutionStatus) -> &'static str {
    match status {
        ExecutionStatus::Passed => "PASSED",
        ExecutionStatus::Failed => "FAILED",
        ExecutionStatus::Skipped => "SKIPPED",
    }
}
