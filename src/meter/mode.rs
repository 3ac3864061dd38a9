//! Meter display modes and the renderers that lay a meter out on one line.

use super::Meter;
use super::rich::{ColorElement, RichLine};

/// How a meter is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MeterMode {
    /// `Mem[|||||      3.91G/8.00G]`
    Bar,
    /// `Mem:8.00G used:3.91G buffers:500M cache:1.17G`
    Text,
}

impl MeterMode {
    /// Next mode in the cycle.
    pub fn next(self) -> Self {
        match self {
            MeterMode::Bar => MeterMode::Text,
            MeterMode::Text => MeterMode::Bar,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeterMode::Bar => "bar",
            MeterMode::Text => "text",
        }
    }
}

/// Renders `meter` in `mode` into a line at most `width` characters wide.
pub fn render(meter: &dyn Meter, mode: MeterMode, width: usize) -> RichLine {
    let mut out = RichLine::with_capacity(width);
    match mode {
        MeterMode::Bar => render_bar(meter, width, &mut out),
        MeterMode::Text => render_text(meter, &mut out),
    }
    out
}

/// Bar mode: caption, then a bracketed bar whose blocks show the leading
/// `cur_items` slots relative to the total, with the compact text
/// right-aligned inside it.
pub fn render_bar(meter: &dyn Meter, width: usize, out: &mut RichLine) {
    let caption = meter.class().caption;
    out.write(ColorElement::MeterText, caption);

    let inner = width.saturating_sub(caption.chars().count() + 2);
    out.append(ColorElement::BarBorder, "[");

    let text: Vec<char> = meter.text().chars().take(inner).collect();
    let mut cells = vec![' '; inner - text.len()];
    cells.extend(text);

    let total = meter.total();
    let class = meter.class();
    let mut filled: usize = 0;
    for (index, value) in meter.bar_values().iter().enumerate() {
        let Some(value) = *value else {
            continue;
        };
        // Also rejects NaN.
        if !(value > 0.0 && total > 0.0) {
            continue;
        }
        // The cast saturates for huge ratios; keep the sum from wrapping.
        let blocks = ((value / total) * inner as f64).ceil() as usize;
        let end = filled.saturating_add(blocks).min(inner);
        if end == filled {
            continue;
        }
        let block: String = cells[filled..end]
            .iter()
            .map(|&c| if c == ' ' { '|' } else { c })
            .collect();
        out.append(class.slot(index).attr, &block);
        filled = end;
    }

    let rest: String = cells[filled..].iter().collect();
    out.append(ColorElement::MeterShadow, &rest);
    out.append(ColorElement::BarBorder, "]");
}

/// Text mode: caption followed by the meter's detailed line.
pub fn render_text(meter: &dyn Meter, out: &mut RichLine) {
    out.write(ColorElement::MeterText, meter.class().caption);
    let mut detail = RichLine::new();
    meter.display(&mut detail);
    out.extend_from(&detail);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::memory::testing::{FixedMemory, sampled};

    fn runs(line: &RichLine) -> Vec<(ColorElement, String)> {
        line.runs().map(|(attr, text)| (attr, text.to_string())).collect()
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(MeterMode::Bar.next(), MeterMode::Text);
        assert_eq!(MeterMode::Text.next(), MeterMode::Bar);
        assert_eq!(MeterMode::Bar.as_str(), "bar");
    }

    #[test]
    fn test_bar_example() {
        let meter = sampled(FixedMemory::example());
        let line = render(&meter, MeterMode::Bar, 30);

        assert_eq!(line.text(), format!("Mem[{}3.91G/8.00G]", "|".repeat(14)));
        assert_eq!(
            runs(&line),
            vec![
                (ColorElement::MeterText, "Mem".to_string()),
                (ColorElement::BarBorder, "[".to_string()),
                (ColorElement::MemoryUsed, "|".repeat(13)),
                (ColorElement::MemoryBuffers, "|3".to_string()),
                (ColorElement::MemoryCache, ".91G".to_string()),
                (ColorElement::MeterShadow, "/8.00G".to_string()),
                (ColorElement::BarBorder, "]".to_string()),
            ]
        );
    }

    #[test]
    fn test_bar_cuts_text_to_width() {
        let meter = sampled(FixedMemory::example());
        let line = render(&meter, MeterMode::Bar, 8);
        assert_eq!(line.text(), "Mem[3.9]");
    }

    #[test]
    fn test_bar_fill_is_clamped() {
        let meter = sampled(FixedMemory {
            total: 100.0,
            used: 90.0,
            buffers: 50.0,
            cache: 50.0,
            ..FixedMemory::default()
        });
        let line = render(&meter, MeterMode::Bar, 14);

        assert_eq!(line.len(), 14);
        assert!(line.text().ends_with(']'));
        assert!(runs(&line).iter().all(|(attr, _)| *attr != ColorElement::MeterShadow));
    }

    #[test]
    fn test_bar_slot_far_above_total() {
        let meter = sampled(FixedMemory {
            used: 100.0,
            buffers: f64::MAX,
            cache: 1.0,
            ..FixedMemory::example()
        });
        let line = render(&meter, MeterMode::Bar, 30);

        assert_eq!(line.len(), 30);
        let runs = runs(&line);
        assert!(runs.iter().any(|(attr, _)| *attr == ColorElement::MemoryBuffers));
        assert!(runs.iter().all(|(attr, _)| *attr != ColorElement::MemoryCache));
    }

    #[test]
    fn test_bar_zero_total_draws_no_blocks() {
        let meter = sampled(FixedMemory {
            used: 10.0,
            ..FixedMemory::default()
        });
        let line = render(&meter, MeterMode::Bar, 20);

        assert!(runs(&line).iter().all(|(attr, _)| *attr != ColorElement::MemoryUsed));
        assert!(!line.text().contains('|'));
    }

    #[test]
    fn test_bar_skips_unsupported_slots() {
        let meter = sampled(FixedMemory {
            shared: Some(300.0),
            ..FixedMemory::example()
        });
        let with_shared = runs(&render(&meter, MeterMode::Bar, 60));
        assert!(
            with_shared
                .iter()
                .any(|(attr, _)| *attr == ColorElement::MemoryShared)
        );

        let meter = sampled(FixedMemory::example());
        let without = runs(&render(&meter, MeterMode::Bar, 60));
        assert!(
            without
                .iter()
                .all(|(attr, _)| *attr != ColorElement::MemoryShared)
        );
    }

    #[test]
    fn test_text_mode() {
        let meter = sampled(FixedMemory::example());
        let line = render(&meter, MeterMode::Text, 80);
        assert_eq!(
            line.text(),
            "Mem:8.00G used:3.91G buffers:500M cache:1.17G"
        );
    }

    #[test]
    fn test_text_mode_respects_width() {
        let meter = sampled(FixedMemory::example());
        let line = render(&meter, MeterMode::Text, 10);
        assert_eq!(line.text(), "Mem:8.00G ");
    }
}
