//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc/meminfo` contents for the
//! kernel configurations a memory meter has to cope with.

use super::filesystem::MockFs;

impl MockFs {
    /// Creates a typical modern system: every optional memory line present,
    /// swap configured but unused, no zswap.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Shmem:            128000 kB
Slab:             512000 kB
SReclaimable:     256000 kB
SUnreclaim:       256000 kB
",
        );
        fs
    }

    /// Creates a pre-3.14 kernel: no `MemAvailable`, `Shmem`, `SReclaimable`
    /// or `SwapCached` lines.
    pub fn legacy_kernel() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        2048000 kB
MemFree:          512000 kB
Buffers:           64000 kB
Cached:           256000 kB
Active:          1024000 kB
Inactive:         256000 kB
SwapTotal:       1024000 kB
SwapFree:        1024000 kB
Dirty:               512 kB
Writeback:             0 kB
Slab:              32000 kB
",
        );
        fs
    }

    /// Creates a system with zswap enabled and swap in use.
    pub fn zswap_system() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:        32000 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        3072000 kB
Zswap:             65536 kB
Zswapped:         262144 kB
Dirty:              1024 kB
Writeback:             0 kB
Shmem:            128000 kB
Slab:             512000 kB
SReclaimable:     256000 kB
SUnreclaim:       256000 kB
",
        );
        fs
    }

    /// Creates a system without any swap device.
    pub fn no_swap() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        8192000 kB
MemFree:         1024000 kB
MemAvailable:    4096000 kB
Buffers:          128000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:             0 kB
SwapFree:              0 kB
Shmem:             64000 kB
Slab:             256000 kB
SReclaimable:     128000 kB
",
        );
        fs
    }

    /// Creates a system with memory pressure (low free memory, swap in use).
    pub fn memory_pressure() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:          256000 kB
MemAvailable:     512000 kB
Buffers:           64000 kB
Cached:           256000 kB
SwapCached:       128000 kB
Active:         12000000 kB
Inactive:        3000000 kB
SwapTotal:       4096000 kB
SwapFree:        1024000 kB
Dirty:            102400 kB
Writeback:         10240 kB
Shmem:             32000 kB
Slab:             800000 kB
SReclaimable:     200000 kB
",
        );
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_every_scenario_has_meminfo() {
        for fs in [
            MockFs::typical_system(),
            MockFs::legacy_kernel(),
            MockFs::zswap_system(),
            MockFs::no_swap(),
            MockFs::memory_pressure(),
        ] {
            let meminfo = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
            assert!(meminfo.starts_with("MemTotal:"));
        }
    }

    #[test]
    fn test_legacy_kernel_lacks_optional_lines() {
        let fs = MockFs::legacy_kernel();
        let meminfo = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        assert!(!meminfo.contains("MemAvailable:"));
        assert!(!meminfo.contains("Shmem:"));
        assert!(!meminfo.contains("SwapCached:"));
    }
}
