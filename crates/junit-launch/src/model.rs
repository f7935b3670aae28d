// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report model: one [`Suite`] per report file
//!
//! These types are built once while loading and never change afterwards.
//! Status is always derived from the stored counters on demand.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};

use crate::item::ExecutionStatus;
use crate::time::end_time;

/// A decoded `<testsuite>` report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suite {
    /// Numeric suite id
    pub id: i64,
    /// Suite name
    pub name: String,
    /// Package the suite belongs to
    pub package: String,
    /// Raw `timestamp` attribute
    pub timestamp: String,
    /// Parsed start instant (Unix epoch when `timestamp` is malformed)
    pub start: DateTime<Utc>,
    /// Total suite duration
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: TimeDelta,
    /// Host the suite ran on
    pub hostname: String,
    /// Number of tests the suite declares
    pub tests: i64,
    /// Number of failed tests the suite declares
    pub failures: i64,
    /// Number of errored tests the suite declares
    pub errors: i64,
    /// Test cases in document order
    pub cases: Vec<TestCase>,
    /// Captured standard output
    pub system_out: String,
    /// Captured standard error
    pub system_err: String,
}

impl Suite {
    /// Fully-qualified suite name, `package.name`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// Suite start plus suite duration
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        end_time(self.start, self.duration)
    }

    /// Status inferred from the suite counters
    ///
    /// A suite that declares no tests is skipped whatever its other counters
    /// say; otherwise any failure or error fails it.
    #[must_use]
    pub fn status(&self) -> ExecutionStatus {
        if self.tests == 0 {
            ExecutionStatus::Skipped
        } else if self.failures > 0 || self.errors > 0 {
            ExecutionStatus::Failed
        } else {
            ExecutionStatus::Passed
        }
    }
}

/// A single `<testcase>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    /// Test name
    pub name: String,
    /// Owning class name
    pub class_name: String,
    /// Test duration
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: TimeDelta,
    /// Failure, present only when the test failed
    pub failure: Option<Failure>,
}

impl TestCase {
    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// End instant of the case
    ///
    /// Reports carry no per-case start time, so every case is taken to start
    /// with its suite.
    #[must_use]
    pub fn end(&self, suite_start: DateTime<Utc>) -> DateTime<Utc> {
        end_time(suite_start, self.duration)
    }

    /// Failed when a failure is attached, passed otherwise
    #[must_use]
    pub fn status(&self) -> ExecutionStatus {
        if self.failed() {
            ExecutionStatus::Failed
        } else {
            ExecutionStatus::Passed
        }
    }
}

/// A `<failure>` attached to a test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// The `type` attribute, usually an exception or assertion class
    pub kind: String,
    /// Short one-line message
    pub message: String,
    /// Full failure body (stack trace, diff, ...)
    pub details: String,
}

fn serialize_millis<S: Serializer>(
    duration: &TimeDelta,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_milliseconds())
}
