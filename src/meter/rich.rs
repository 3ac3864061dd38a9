//! Styled text runs produced by meters.
//!
//! Meters never touch terminal styles directly: they tag each run with a
//! [`ColorElement`] and the TUI maps elements to colours when drawing.

/// Default capacity of a [`RichLine`], in characters.
pub const RICH_LINE_CAPACITY: usize = 512;

/// Colour/attribute role of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorElement {
    MeterText,
    MeterValue,
    MeterShadow,
    BarBorder,
    MemoryUsed,
    MemoryCompressed,
    MemoryBuffers,
    MemoryBuffersText,
    MemoryShared,
    MemoryCache,
    Swap,
    SwapCache,
    SwapFrontswap,
}

/// A line of `(ColorElement, text)` runs with a bounded character capacity.
///
/// Appending past the capacity cuts the run short; nothing is ever reported
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichLine {
    runs: Vec<(ColorElement, String)>,
    len: usize,
    capacity: usize,
}

impl RichLine {
    pub fn new() -> Self {
        Self::with_capacity(RICH_LINE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            runs: Vec::new(),
            len: 0,
            capacity,
        }
    }

    /// Replaces the whole line with a single run.
    pub fn write(&mut self, attr: ColorElement, text: &str) {
        self.clear();
        self.append(attr, text);
    }

    /// Appends a run, cut to the remaining capacity.
    pub fn append(&mut self, attr: ColorElement, text: &str) {
        let room = self.capacity - self.len;
        let taken: String = text.chars().take(room).collect();
        if taken.is_empty() {
            return;
        }
        self.len += taken.chars().count();
        self.runs.push((attr, taken));
    }

    /// Appends every run of `other`.
    pub fn extend_from(&mut self, other: &RichLine) {
        for (attr, text) in &other.runs {
            self.append(*attr, text);
        }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
        self.len = 0;
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> impl Iterator<Item = (ColorElement, &str)> {
        self.runs.iter().map(|(attr, text)| (*attr, text.as_str()))
    }

    /// Plain text of the line without attributes.
    pub fn text(&self) -> String {
        self.runs.iter().map(|(_, text)| text.as_str()).collect()
    }
}

impl Default for RichLine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_line() {
        let mut line = RichLine::new();
        line.append(ColorElement::MeterValue, "stale");
        line.write(ColorElement::MeterText, ":");
        assert_eq!(line.text(), ":");
        assert_eq!(line.runs().count(), 1);
    }

    #[test]
    fn test_runs_keep_attributes() {
        let mut line = RichLine::new();
        line.write(ColorElement::MeterText, " used:");
        line.append(ColorElement::MemoryUsed, "3.91G");

        let runs: Vec<_> = line.runs().collect();
        assert_eq!(
            runs,
            vec![
                (ColorElement::MeterText, " used:"),
                (ColorElement::MemoryUsed, "3.91G"),
            ]
        );
        assert_eq!(line.len(), 11);
    }

    #[test]
    fn test_capacity_cuts_text() {
        let mut line = RichLine::with_capacity(6);
        line.append(ColorElement::MeterText, "Mem");
        line.append(ColorElement::BarBorder, "[||||");
        line.append(ColorElement::BarBorder, "]");
        assert_eq!(line.text(), "Mem[||");
        assert_eq!(line.runs().count(), 2);
    }

    #[test]
    fn test_empty_runs_are_dropped() {
        let mut line = RichLine::new();
        line.append(ColorElement::MeterText, "");
        assert!(line.is_empty());
        assert_eq!(line.runs().count(), 0);
    }

    #[test]
    fn test_extend_from() {
        let mut detail = RichLine::new();
        detail.write(ColorElement::MeterText, ":");
        detail.append(ColorElement::MeterValue, "8.00G");

        let mut line = RichLine::new();
        line.write(ColorElement::MeterText, "Mem");
        line.extend_from(&detail);
        assert_eq!(line.text(), "Mem:8.00G");
    }
}
