// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Diagnostic sink used by the loader
//!
//! Per-file problems never fail a load; they are reported through a
//! [`Diagnostics`] implementation instead. [`TracingDiagnostics`] forwards
//! everything to `tracing`, which is what [`crate::load`] uses.

/// Receives non-fatal diagnostics produced while loading reports
pub trait Diagnostics {
    /// Record a debug-level diagnostic (e.g. a skipped non-report entry)
    fn debug(&mut self, message: &str);

    /// Record an error-level diagnostic (e.g. a report that failed to decode)
    fn error(&mut self, message: &str);
}

/// Forwards diagnostics to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&mut self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}
