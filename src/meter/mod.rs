//! Meter framework.
//!
//! A meter samples one category of system metric into a fixed array of
//! slots and renders it two ways from that same array:
//!
//! - compact: `"used/total"` (shown inside the bar in bar mode)
//! - detailed: `":total used:X buffers:Y ..."` (text mode)
//!
//! Each meter type declares a static [`MeterClass`] with its caption, default
//! mode and per-slot role table, and a slot enum implementing [`Slot`].
//! Slots the platform cannot report hold `None`; optional slots are reset to
//! `None` before every sample so a platform that skips them never leaves a
//! stale reading behind.

mod buffer;
mod class;
mod data;
pub mod memory;
pub mod mode;
mod rich;
pub mod swap;

pub use buffer::{METER_TXT_CAPACITY, MeterBuffer};
pub use class::{MeterClass, SlotInfo};
pub use data::{MeterData, Slot};
pub use memory::{MEMORY_CLASS, MemoryMeter, MemoryPlatform, MemorySlot};
pub use mode::MeterMode;
pub use rich::{ColorElement, RICH_LINE_CAPACITY, RichLine};
pub use swap::{SWAP_CLASS, SwapMeter, SwapPlatform, SwapSlot};

use std::fmt::Write;

use crate::fmt::{UnitPrefix, human_unit_from};

/// One meter instance on the dashboard.
pub trait Meter {
    /// Static descriptor of this meter's type.
    fn class(&self) -> &'static MeterClass;

    /// Samples the platform and rebuilds the compact text. Called once per tick.
    fn update_values(&mut self);

    /// Reference value bar blocks are measured against.
    fn total(&self) -> f64;

    /// Leading slots that take part in bar mode.
    fn bar_values(&self) -> &[Option<f64>];

    /// Compact `"used/total"` text from the last sample.
    fn text(&self) -> &str;

    /// Writes the detailed labelled line of the last sample.
    fn display(&self, out: &mut RichLine);
}

/// Writes `"<used>/<total>"` into `buf`, replacing its content.
pub fn write_compact(buf: &mut MeterBuffer, used: f64, total: f64, unit: UnitPrefix) {
    buf.clear();
    // MeterBuffer truncates instead of failing.
    let _ = write!(
        buf,
        "{}/{}",
        human_unit_from(used, unit),
        human_unit_from(total, unit)
    );
}

/// Writes `":<total>"` followed by one `" <label>:<value>"` segment per slot,
/// in slot order. Optional slots without a value are skipped; required slots
/// without a value (before the first sample) print as zero.
pub fn write_detailed<const N: usize>(
    out: &mut RichLine,
    class: &MeterClass,
    data: &MeterData<N>,
    unit: UnitPrefix,
) {
    out.write(ColorElement::MeterText, ":");
    out.append(ColorElement::MeterValue, &human_unit_from(data.total(), unit));

    for (info, value) in class.slots.iter().zip(data.values()) {
        let value = match value {
            Some(value) => *value,
            None if info.optional => continue,
            None => 0.0,
        };
        out.append(ColorElement::MeterText, &format!(" {}:", info.label));
        out.append(info.text_attr, &human_unit_from(value, unit));
    }
}
