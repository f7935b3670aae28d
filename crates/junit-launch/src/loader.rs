// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report directory loading
//!
//! Every regular `*.xml` file in the directory is decoded into a
//! [`Suite`]. Files that cannot be read or decoded are reported through
//! [`Diagnostics`] and skipped; only a directory that cannot be listed fails
//! the load. The result is sorted by suite start time.
//!
//! # Example
//!
//! ```no_run
//! use junit_launch::load;
//!
//! let report = load("target/test-reports").expect("load reports");
//! for i in 0..report.suites_count() {
//!     println!("{} ({} cases)", report.suite(i).name, report.test_case_count(i));
//! }
//! ```

use std::ffi::OsStr;
use std::path::Path;

use tracing::info;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ReportError;
use crate::model::Suite;
use crate::report::XmlReport;
use crate::schema;

/// Extension a report file must have (exact, case-sensitive)
pub const REPORT_EXTENSION: &str = "xml";

/// Counters gathered while loading a report directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Directory entries seen
    pub entries: usize,
    /// Entries skipped because they are directories or not `*.xml`
    pub skipped: usize,
    /// Report files decoded successfully
    pub loaded: usize,
    /// Report files that could not be read or decoded
    pub failed: usize,
}

/// Load all reports in `dir`, logging per-file problems through `tracing`
///
/// # Errors
///
/// Returns [`ReportError::MissingDirectory`] if `dir` is empty and
/// [`ReportError::Io`] if the directory cannot be listed.
pub fn load(dir: impl AsRef<Path>) -> Result<XmlReport, ReportError> {
    load_with(dir, &mut TracingDiagnostics)
}

/// Load all reports in `dir`, sending per-file problems to `diagnostics`
///
/// # Errors
///
/// Returns [`ReportError::MissingDirectory`] if `dir` is empty and
/// [`ReportError::Io`] if the directory cannot be listed.
pub fn load_with<D: Diagnostics + ?Sized>(
    dir: impl AsRef<Path>,
    diagnostics: &mut D,
) -> Result<XmlReport, ReportError> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(ReportError::MissingDirectory);
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut summary = LoadSummary::default();
    let mut suites = Vec::new();

    for entry in entries {
        summary.entries += 1;
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diagnostics.error(&format!("cannot read entry in {}: {e}", dir.display()));
                summary.failed += 1;
                continue;
            }
        };

        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir || path.extension() != Some(OsStr::new(REPORT_EXTENSION)) {
            diagnostics.debug(&format!("not a report file '{}'", path.display()));
            summary.skipped += 1;
            continue;
        }

        match read_suite(&path) {
            Ok(suite) => {
                summary.loaded += 1;
                suites.push(suite);
            }
            Err(message) => {
                diagnostics.error(&message);
                summary.failed += 1;
            }
        }
    }

    suites.sort_by_key(|suite| suite.start);

    info!(
        dir = %dir.display(),
        loaded = summary.loaded,
        failed = summary.failed,
        skipped = summary.skipped,
        "Loaded JUnit reports"
    );

    Ok(XmlReport::new(suites, summary))
}

/// Decode a single `<testsuite>` document
///
/// # Errors
///
/// Returns [`ReportError::Decode`] if the bytes are not valid UTF-8 XML
/// matching the suite schema.
pub fn parse_suite(bytes: &[u8]) -> Result<Suite, ReportError> {
    let xml = std::str::from_utf8(bytes).map_err(|e| ReportError::Decode {
        source: quick_xml::DeError::Custom(format!("invalid UTF-8: {e}")),
    })?;
    Ok(Suite::from(schema::decode(xml)?))
}

/// Read and decode one report file
///
/// The file handle lives only for the duration of `fs::read`.
fn read_suite(path: &Path) -> Result<Suite, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    parse_suite(&bytes).map_err(|e| format!("cannot decode '{}': {e}", path.display()))
}
