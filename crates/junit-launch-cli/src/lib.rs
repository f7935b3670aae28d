//! junit-launch-cli library
//!
//! This module exports the configuration and rendering used by the
//! `junit-launch` binary for use in integration tests and as a library.

pub mod config;
pub mod render;
