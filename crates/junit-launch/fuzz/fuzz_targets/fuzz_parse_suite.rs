// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for JUnit suite decoding
//!
//! This fuzzes `parse_suite`, which decodes one `<testsuite>` document and
//! derives its timing.

#![no_main]

use libfuzzer_sys::fuzz_target;

use junit_launch::parse_suite;

fuzz_target!(|data: &[u8]| {
    // Decoding and the derived values should never panic on any input
    if let Ok(suite) = parse_suite(data) {
        let _ = suite.end();
        let _ = suite.status();
        for case in &suite.cases {
            let _ = case.end(suite.start);
        }
    }
});
