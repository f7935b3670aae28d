// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junit-launch: JUnit XML report loading for test launches
//!
//! This library crate loads a directory of JUnit-style `<testsuite>` XML
//! reports, orders the suites by start time and exposes an index-addressed
//! view with derived timing and pass/fail/skip status, ready to be rendered
//! as test items, execution results and log messages.
//!
//! # Example
//!
//! ```no_run
//! use junit_launch::load;
//!
//! let report = load("target/surefire-reports").unwrap();
//! for i in 0..report.suites_count() {
//!     let suite = report.suite(i);
//!     let result = report.suite_result(i);
//!     println!("{} {:?}", suite.name, result.status);
//!     for j in 0..report.test_case_count(i) {
//!         if report.has_test_case_failure(i, j) {
//!             println!("  {}", report.test_case_failure(i, j).message);
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod item;
pub mod loader;
pub mod model;
pub mod report;
pub mod time;

mod schema;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use error::ReportError;
pub use item::{ExecutionResult, ExecutionStatus, LogLevel, LogMessage, TestItem, TestItemType};
pub use loader::{LoadSummary, load, load_with, parse_suite};
pub use model::{Failure, Suite, TestCase};
pub use report::XmlReport;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::item::{ExecutionResult, ExecutionStatus, LogMessage, TestItem};
    pub use crate::loader::{load, load_with};
    pub use crate::report::XmlReport;
}
