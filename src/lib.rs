//! memmeter - htop-style memory and swap meters.
//!
//! This library provides:
//! - `meter` - the meter framework (slot arrays, sampling, compact and
//!   detailed rendering, bar/text modes) and the memory and swap meters
//! - `collector` - platform sources reading `/proc/meminfo`
//! - `tui` - an interactive ratatui dashboard used by the `memmeter` binary

pub mod collector;
pub mod fmt;
pub mod meter;
pub mod tui;
