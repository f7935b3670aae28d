// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reporting records handed to the launch consumer
//!
//! A report is rendered as test items (suites and their steps), an
//! execution result per item, and log messages for failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a reported test item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestItemType {
    /// One report file
    Suite,
    /// One test case within a suite
    Step,
}

/// A suite or test case as it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestItem {
    /// Item kind
    #[serde(rename = "type")]
    pub item_type: TestItemType,
    /// Display name
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start instant
    pub start_time: DateTime<Utc>,
}

/// Final status of a test item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionStatus {
    /// Everything passed
    Passed,
    /// At least one failure or error
    Failed,
    /// Nothing was run
    Skipped,
}

/// How a test item finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// End instant
    pub end_time: DateTime<Utc>,
    /// Final status
    pub status: ExecutionStatus,
}

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Failure message
    Error,
    /// Failure details
    Info,
}

/// A log line attached to a test item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// When the message was logged
    pub time: DateTime<Utc>,
    /// Severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
}
