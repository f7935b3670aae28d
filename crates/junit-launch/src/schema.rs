// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Wire schema for a JUnit `<testsuite>` document
//!
//! These structs only exist as a `quick-xml` decode target and are turned
//! into [`crate::model`] types straight away. Missing or empty attributes
//! fall back to zero/empty values and unknown elements (`properties`,
//! `skipped`, ...) are ignored. When a single-valued child such as
//! `<failure>` or `<system-out>` repeats, the last one wins.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::model::{Failure, Suite, TestCase};
use crate::time::{parse_timestamp, seconds_to_duration};

/// `<testsuite>` root element
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlSuite {
    #[serde(rename = "@id", deserialize_with = "number")]
    id: i64,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@package")]
    package: String,
    #[serde(rename = "@timestamp")]
    timestamp: String,
    #[serde(rename = "@time", deserialize_with = "number")]
    time: f64,
    #[serde(rename = "@hostname")]
    hostname: String,
    #[serde(rename = "@tests", deserialize_with = "number")]
    tests: i64,
    #[serde(rename = "@failures", deserialize_with = "number")]
    failures: i64,
    #[serde(rename = "@errors", deserialize_with = "number")]
    errors: i64,
    #[serde(rename = "testcase")]
    cases: Vec<XmlTestCase>,
    #[serde(rename = "system-out")]
    system_out: Vec<String>,
    #[serde(rename = "system-err")]
    system_err: Vec<String>,
}

/// `<testcase>` element
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlTestCase {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@classname")]
    class_name: String,
    #[serde(rename = "@time", deserialize_with = "number")]
    time: f64,
    failure: Vec<XmlFailure>,
}

/// `<failure>` element; its text body is the failure details
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct XmlFailure {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(rename = "@message")]
    message: String,
    #[serde(rename = "$text")]
    details: String,
}

/// Numeric attribute: surrounding whitespace is ignored and an empty value
/// reads as zero
fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let value = raw.trim();
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid number {raw:?}: {e}")))
}

/// Decode a single report document
pub(crate) fn decode(xml: &str) -> Result<XmlSuite, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}

impl From<XmlSuite> for Suite {
    fn from(mut xml: XmlSuite) -> Self {
        let start = parse_timestamp(&xml.timestamp);
        Self {
            id: xml.id,
            name: xml.name,
            package: xml.package,
            timestamp: xml.timestamp,
            start,
            duration: seconds_to_duration(xml.time),
            hostname: xml.hostname,
            tests: xml.tests,
            failures: xml.failures,
            errors: xml.errors,
            cases: xml.cases.into_iter().map(TestCase::from).collect(),
            system_out: xml.system_out.pop().unwrap_or_default(),
            system_err: xml.system_err.pop().unwrap_or_default(),
        }
    }
}

impl From<XmlTestCase> for TestCase {
    fn from(mut xml: XmlTestCase) -> Self {
        Self {
            name: xml.name,
            class_name: xml.class_name,
            duration: seconds_to_duration(xml.time),
            failure: xml.failure.pop().map(Failure::from),
        }
    }
}

impl From<XmlFailure> for Failure {
    fn from(xml: XmlFailure) -> Self {
        Self {
            kind: xml.kind,
            message: xml.message,
            details: xml.details,
        }
    }
}
