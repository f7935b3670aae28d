// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for junit-launch

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading JUnit XML reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// No report directory was given
    #[error("report directory must not be empty")]
    MissingDirectory,

    /// The report directory could not be listed
    #[error("cannot read report directory {path}: {source}")]
    Io {
        /// The directory that could not be listed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// A report document did not match the suite schema
    #[error("XML decode error: {source}")]
    Decode {
        /// Underlying decoder error
        #[from]
        source: quick_xml::DeError,
    },
}
