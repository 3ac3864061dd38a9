//! Platform sources that fill meter slots.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ MemoryMeter  │   │  SwapMeter   │
//! └──────┬───────┘   └──────┬───────┘
//!        │ MemoryPlatform   │ SwapPlatform
//!        └────────┬─────────┘
//!          ┌──────▼──────┐
//!          │ ProcMemory  │  /proc/meminfo
//!          └──────┬──────┘
//!          ┌──────▼──────┐
//!          │  FileSystem │ (trait)
//!          └──────┬──────┘
//!         ┌───────┴───────┐
//!  ┌──────▼──────┐ ┌──────▼──────┐
//!  │   RealFs    │ │   MockFs    │
//!  │  (Linux)    │ │  (Testing)  │
//!  └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use memmeter::collector::{MockFs, ProcMemory};
//! use memmeter::meter::{Meter, MemoryMeter};
//!
//! let mut meter = MemoryMeter::new(ProcMemory::new(MockFs::typical_system(), "/proc"));
//! meter.update_values();
//! assert_eq!(meter.text(), "5.13G/15.6G");
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, ProcMemory};
pub use traits::{FileSystem, RealFs};
