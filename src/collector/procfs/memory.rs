//! Memory and swap readings from `/proc/meminfo`.

use crate::collector::procfs::parser::{MemInfo, parse_meminfo};
use crate::collector::traits::FileSystem;
use crate::meter::memory::MEMORY_ITEMS;
use crate::meter::swap::SWAP_ITEMS;
use crate::meter::{MemoryPlatform, MemorySlot, MeterData, SwapPlatform, SwapSlot};
use std::path::Path;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading a `/proc` file.
    Io(std::io::Error),
    /// Parse error in a `/proc` file.
    Parse(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// Linux memory and swap source backed by `/proc/meminfo` (values in KiB).
pub struct ProcMemory<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcMemory<F> {
    /// Creates a new memory source.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    fn read_meminfo(&self) -> Result<MemInfo, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        parse_meminfo(&content).map_err(|e| CollectError::Parse(e.message))
    }
}

impl<F: FileSystem> MemoryPlatform for ProcMemory<F> {
    fn set_memory_values(&self, data: &mut MeterData<MEMORY_ITEMS>) -> Result<(), CollectError> {
        let info = self.read_meminfo()?;
        let total = info.mem_total;
        let sreclaimable = info.s_reclaimable.unwrap_or(0);
        let shmem = info.shmem.unwrap_or(0);

        // Shmem is accounted in Cached but cannot be dropped like page cache.
        let cache = info.cached.saturating_add(sreclaimable).saturating_sub(shmem);

        let used_diff = info
            .mem_free
            .saturating_add(info.cached)
            .saturating_add(sreclaimable)
            .saturating_add(info.buffers);
        let mut used = if total >= used_diff {
            total - used_diff
        } else {
            total.saturating_sub(info.mem_free)
        };

        // Kernels before 3.14 have no MemAvailable; free memory is the closest estimate.
        let available = info
            .mem_available
            .map(|available| available.min(total))
            .unwrap_or(info.mem_free);

        if let Some(zswap) = info.zswap {
            // The zswap pool is kernel memory counted in used; show it apart.
            used = used.saturating_sub(zswap);
            data.set(MemorySlot::Compressed, zswap as f64);
        }
        if let Some(shmem) = info.shmem {
            data.set(MemorySlot::Shared, shmem as f64);
        }

        data.set_total(total as f64);
        data.set(MemorySlot::Used, used as f64);
        data.set(MemorySlot::Buffers, info.buffers as f64);
        data.set(MemorySlot::Cache, cache as f64);
        data.set(MemorySlot::Available, available as f64);
        Ok(())
    }
}

impl<F: FileSystem> SwapPlatform for ProcMemory<F> {
    fn set_swap_values(&self, data: &mut MeterData<SWAP_ITEMS>) -> Result<(), CollectError> {
        let info = self.read_meminfo()?;

        let mut used = info
            .swap_total
            .saturating_sub(info.swap_free)
            .saturating_sub(info.swap_cached.unwrap_or(0));

        if let Some(cached) = info.swap_cached {
            data.set(SwapSlot::Cache, cached as f64);
        }
        if let Some(zswapped) = info.zswapped {
            used = used.saturating_sub(zswapped);
            data.set(SwapSlot::Frontswap, zswapped as f64);
        }

        data.set_total(info.swap_total as f64);
        data.set(SwapSlot::Used, used as f64);
        Ok(())
    }
}
