//! Static per-type meter descriptors.

use super::mode::MeterMode;
use super::rich::ColorElement;

/// Fixed role of one slot of a meter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInfo {
    /// Label printed before the value in detailed output (`"used"`).
    pub label: &'static str,
    /// Attribute of the slot's block in bar mode.
    pub attr: ColorElement,
    /// Attribute of the slot's value in detailed output.
    pub text_attr: ColorElement,
    /// Slot is not reported on every platform and is reset before each sample.
    pub optional: bool,
}

/// Immutable description of a meter type, shared by all its instances.
#[derive(Debug)]
pub struct MeterClass {
    pub name: &'static str,
    pub caption: &'static str,
    pub default_mode: MeterMode,
    /// Leading slots that take part in bar-mode aggregation.
    pub bar_items: usize,
    /// One entry per slot, indexed by the meter's slot enum.
    pub slots: &'static [SlotInfo],
}

impl MeterClass {
    pub fn max_items(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> &SlotInfo {
        &self.slots[index]
    }
}
