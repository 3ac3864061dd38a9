//! Memory meter: used, compressed, buffers, shared, cache and available memory.

use tracing::{trace, warn};

use crate::collector::CollectError;
use crate::fmt::UnitPrefix;

use super::class::{MeterClass, SlotInfo};
use super::data::{MeterData, Slot};
use super::mode::MeterMode;
use super::rich::{ColorElement, RichLine};
use super::{Meter, MeterBuffer, write_compact, write_detailed};

/// Slot roles of the memory meter, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySlot {
    Used,
    /// Memory holding compressed pages (zswap, macOS compressor).
    Compressed,
    Buffers,
    Shared,
    Cache,
    /// Not drawn in bar mode.
    Available,
}

impl Slot for MemorySlot {
    fn index(self) -> usize {
        self as usize
    }
}

/// Number of memory slots.
pub const MEMORY_ITEMS: usize = 6;

/// Slots drawn in bar mode: everything but `Available`, so the bar shows
/// only what is in use relative to the total.
const MEMORY_BAR_ITEMS: usize = 5;

pub static MEMORY_CLASS: MeterClass = MeterClass {
    name: "Memory",
    caption: "Mem",
    default_mode: MeterMode::Bar,
    bar_items: MEMORY_BAR_ITEMS,
    slots: &[
        SlotInfo {
            label: "used",
            attr: ColorElement::MemoryUsed,
            text_attr: ColorElement::MemoryUsed,
            optional: false,
        },
        SlotInfo {
            label: "compressed",
            attr: ColorElement::MemoryCompressed,
            text_attr: ColorElement::MemoryCompressed,
            optional: true,
        },
        SlotInfo {
            label: "buffers",
            attr: ColorElement::MemoryBuffers,
            text_attr: ColorElement::MemoryBuffersText,
            optional: false,
        },
        SlotInfo {
            label: "shared",
            attr: ColorElement::MemoryShared,
            text_attr: ColorElement::MemoryShared,
            optional: true,
        },
        SlotInfo {
            label: "cache",
            attr: ColorElement::MemoryCache,
            text_attr: ColorElement::MemoryCache,
            optional: false,
        },
        SlotInfo {
            label: "available",
            attr: ColorElement::MeterValue,
            text_attr: ColorElement::MeterValue,
            optional: true,
        },
    ],
};

/// Source of memory readings.
pub trait MemoryPlatform {
    /// Unit the platform reports values in.
    fn unit(&self) -> UnitPrefix {
        UnitPrefix::Kibi
    }

    /// Writes the total and every slot the platform can report into `data`.
    /// Slots it cannot report must be left untouched.
    fn set_memory_values(&self, data: &mut MeterData<MEMORY_ITEMS>) -> Result<(), CollectError>;
}

/// Used memory as shown in compact mode: used plus compressed, when the
/// platform reports compressed memory.
pub fn used_with_compressed(data: &MeterData<MEMORY_ITEMS>) -> f64 {
    let used = data.get_or_zero(MemorySlot::Used);
    match data.get(MemorySlot::Compressed) {
        Some(compressed) => used + compressed,
        None => used,
    }
}

/// Memory meter over a platform source.
pub struct MemoryMeter<P: MemoryPlatform> {
    platform: P,
    unit: UnitPrefix,
    data: MeterData<MEMORY_ITEMS>,
    txt: MeterBuffer,
}

impl<P: MemoryPlatform> MemoryMeter<P> {
    pub fn new(platform: P) -> Self {
        let unit = platform.unit();
        Self {
            platform,
            unit,
            data: MeterData::new(&MEMORY_CLASS),
            txt: MeterBuffer::new(),
        }
    }

    pub fn data(&self) -> &MeterData<MEMORY_ITEMS> {
        &self.data
    }
}

impl<P: MemoryPlatform> Meter for MemoryMeter<P> {
    fn class(&self) -> &'static MeterClass {
        &MEMORY_CLASS
    }

    fn update_values(&mut self) {
        // compressed, shared and available memory are not reported everywhere
        self.data.reset_optional(&MEMORY_CLASS);
        if let Err(e) = self.platform.set_memory_values(&mut self.data) {
            warn!(meter = MEMORY_CLASS.name, error = %e, "failed to sample memory");
        }

        let used = used_with_compressed(&self.data);
        write_compact(&mut self.txt, used, self.data.total(), self.unit);
        trace!(meter = MEMORY_CLASS.name, values = ?self.data.values(), text = %self.txt, "sampled");
    }

    fn total(&self) -> f64 {
        self.data.total()
    }

    fn bar_values(&self) -> &[Option<f64>] {
        self.data.bar_values()
    }

    fn text(&self) -> &str {
        self.txt.as_str()
    }

    fn display(&self, out: &mut RichLine) {
        write_detailed(out, &MEMORY_CLASS, &self.data, self.unit);
    }
}
