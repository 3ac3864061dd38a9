//! Fixed-capacity text buffer for a meter's compact value.

use std::fmt;

/// Capacity of a meter's compact text, in bytes.
pub const METER_TXT_CAPACITY: usize = 256;

/// Bounded text buffer holding the compact `"used/total"` text of a meter.
///
/// Appends past the capacity are cut on a char boundary and otherwise
/// ignored: a partially filled value is acceptable, a failed draw is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterBuffer {
    text: String,
    capacity: usize,
}

impl MeterBuffer {
    pub fn new() -> Self {
        Self::with_capacity(METER_TXT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Appends as much of `s` as fits. Returns the number of bytes written.
    pub fn push_str(&mut self, s: &str) -> usize {
        let room = self.remaining();
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&s[..end]);
        end
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.text.len())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for MeterBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for MeterBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for MeterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
