//! Platform sources for Linux `/proc` filesystem.

pub mod memory;
pub mod parser;

pub use memory::{CollectError, ProcMemory};
