//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of `/proc` files into
//! structured data. They are designed to be easily testable with string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parsed data from `/proc/meminfo` (all values in KiB).
///
/// Lines that older kernels or kernels without zswap do not print are
/// `Option`s so callers can tell "zero" from "not reported".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    /// Since Linux 3.14.
    pub mem_available: Option<u64>,
    /// Since Linux 2.6.32.
    pub shmem: Option<u64>,
    /// Since Linux 2.6.19.
    pub s_reclaimable: Option<u64>,
    pub swap_cached: Option<u64>,
    /// Compressed size of the zswap pool.
    pub zswap: Option<u64>,
    /// Uncompressed size of the pages stored in zswap.
    pub zswapped: Option<u64>,
}

/// Keys of `/proc/meminfo` that [`parse_meminfo`] extracts.
const MEMINFO_KEYS: [&str; 12] = [
    "MemTotal",
    "MemFree",
    "MemAvailable",
    "Buffers",
    "Cached",
    "SwapCached",
    "SwapTotal",
    "SwapFree",
    "Shmem",
    "SReclaimable",
    "Zswap",
    "Zswapped",
];

/// Parses `/proc/meminfo` content.
///
/// Unknown keys are ignored. `MemTotal` is mandatory; every other key
/// defaults to zero (or `None` for optional lines) when absent.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut has_total = false;

    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if !MEMINFO_KEYS.contains(&key) {
            continue;
        }

        let value: u64 = rest
            .split_whitespace()
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ParseError::new(format!("invalid value for {}", key)))?;

        match key {
            "MemTotal" => {
                info.mem_total = value;
                has_total = true;
            }
            "MemFree" => info.mem_free = value,
            "MemAvailable" => info.mem_available = Some(value),
            "Buffers" => info.buffers = value,
            "Cached" => info.cached = value,
            "SwapCached" => info.swap_cached = Some(value),
            "SwapTotal" => info.swap_total = value,
            "SwapFree" => info.swap_free = value,
            "Shmem" => info.shmem = Some(value),
            "SReclaimable" => info.s_reclaimable = Some(value),
            "Zswap" => info.zswap = Some(value),
            "Zswapped" => info.zswapped = Some(value),
            _ => {}
        }
    }

    if !has_total {
        return Err(ParseError::new("missing MemTotal in meminfo"));
    }

    Ok(info)
}
