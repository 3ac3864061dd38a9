//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs` and pre-built `/proc` scenarios for testing
//! memory and swap sources without requiring actual Linux `/proc` access.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
