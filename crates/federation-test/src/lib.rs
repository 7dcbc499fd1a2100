//! Federation Test Harness - Fixtures and end-to-end validation
//!
//! This crate provides:
//! - Sample entities modelled on reference Diaspora payloads
//! - The validate -> adapt -> render pipeline used by tests and benchmarks
//! - Test logging setup

pub mod fixtures;
pub mod integration;
pub mod logging;

pub use fixtures::*;
pub use integration::*;
pub use logging::*;
