// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Index-addressed view over a loaded report directory
//!
//! Suites are addressed by position in start-time order and cases by
//! position within their suite. Indices are zero-based. Every accessor
//! panics on an out-of-range index; callers are expected to iterate
//! `0..suites_count()` and `0..test_case_count(i)`.

use chrono::{DateTime, Utc};

use crate::item::{ExecutionResult, LogLevel, LogMessage, TestItem, TestItemType};
use crate::loader::LoadSummary;
use crate::model::{Failure, Suite, TestCase};

/// A loaded, start-time ordered collection of suites
#[derive(Debug, Clone, Default)]
pub struct XmlReport {
    suites: Vec<Suite>,
    summary: LoadSummary,
}

impl XmlReport {
    pub(crate) fn new(suites: Vec<Suite>, summary: LoadSummary) -> Self {
        Self { suites, summary }
    }

    /// Number of suites
    #[must_use]
    pub fn suites_count(&self) -> usize {
        self.suites.len()
    }

    /// Check if no report file was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// All suites, ordered by start time
    #[must_use]
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Counters from the load that produced this report
    #[must_use]
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    /// Number of test cases in suite `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn test_case_count(&self, i: usize) -> usize {
        self.suites[i].cases.len()
    }

    /// Start of the launch: the start of the earliest suite
    ///
    /// # Panics
    ///
    /// Panics if the report is empty.
    #[must_use]
    pub fn launch_start_time(&self) -> DateTime<Utc> {
        match self.suites.first() {
            Some(suite) => suite.start,
            None => panic!("launch start time requested for an empty report"),
        }
    }

    /// End of the launch: start of the last suite plus its duration
    ///
    /// This is not the latest end across all suites. An earlier suite that
    /// runs past the last one is not taken into account.
    ///
    /// # Panics
    ///
    /// Panics if the report is empty.
    #[must_use]
    pub fn launch_end_time(&self) -> DateTime<Utc> {
        match self.suites.last() {
            Some(suite) => suite.end(),
            None => panic!("launch end time requested for an empty report"),
        }
    }

    /// Suite `i` as a `SUITE` test item
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn suite(&self, i: usize) -> TestItem {
        let suite = &self.suites[i];
        TestItem {
            item_type: TestItemType::Suite,
            name: suite.full_name(),
            description: Some(format!("suite {}", suite.id)),
            start_time: suite.start,
        }
    }

    /// Outcome of suite `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn suite_result(&self, i: usize) -> ExecutionResult {
        let suite = &self.suites[i];
        ExecutionResult {
            end_time: suite.end(),
            status: suite.status(),
        }
    }

    /// Case `j` of suite `i` as a `STEP` test item
    ///
    /// Cases have no start time of their own and start with their suite.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn test_case(&self, i: usize, j: usize) -> TestItem {
        let (suite, case) = self.case_at(i, j);
        TestItem {
            item_type: TestItemType::Step,
            name: case.name.clone(),
            description: None,
            start_time: suite.start,
        }
    }

    /// Outcome of case `j` of suite `i`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn test_case_result(&self, i: usize, j: usize) -> ExecutionResult {
        let (suite, case) = self.case_at(i, j);
        ExecutionResult {
            end_time: case.end(suite.start),
            status: case.status(),
        }
    }

    /// Check if case `j` of suite `i` carries a failure
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn has_test_case_failure(&self, i: usize, j: usize) -> bool {
        self.case_at(i, j).1.failed()
    }

    /// Failure message of case `j` of suite `i` as an `ERROR` log
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range or the case did not fail.
    #[must_use]
    pub fn test_case_failure(&self, i: usize, j: usize) -> LogMessage {
        let (time, failure) = self.failure_at(i, j);
        LogMessage {
            time,
            level: LogLevel::Error,
            message: failure.message.clone(),
        }
    }

    /// Failure details of case `j` of suite `i` as an `INFO` log
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range or the case did not fail.
    #[must_use]
    pub fn test_case_failure_details(&self, i: usize, j: usize) -> LogMessage {
        let (time, failure) = self.failure_at(i, j);
        LogMessage {
            time,
            level: LogLevel::Info,
            message: failure.details.clone(),
        }
    }

    fn case_at(&self, i: usize, j: usize) -> (&Suite, &TestCase) {
        let suite = &self.suites[i];
        (suite, &suite.cases[j])
    }

    /// Case end time and failure, for the failure log accessors
    fn failure_at(&self, i: usize, j: usize) -> (DateTime<Utc>, &Failure) {
        let (suite, case) = self.case_at(i, j);
        match &case.failure {
            Some(failure) => (case.end(suite.start), failure),
            None => panic!(
                "test case {j} of suite {i} ('{}') has no failure",
                case.name
            ),
        }
    }
}
