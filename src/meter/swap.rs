//! Swap meter: used swap, swap cache and frontswap (zswap) pages.

use tracing::{trace, warn};

use crate::collector::CollectError;
use crate::fmt::UnitPrefix;

use super::class::{MeterClass, SlotInfo};
use super::data::{MeterData, Slot};
use super::mode::MeterMode;
use super::rich::{ColorElement, RichLine};
use super::{Meter, MeterBuffer, write_compact, write_detailed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSlot {
    Used,
    /// Pages present both in swap and in RAM.
    Cache,
    /// Swapped pages held in a compressed RAM pool instead of on disk.
    Frontswap,
}

impl Slot for SwapSlot {
    fn index(self) -> usize {
        self as usize
    }
}

pub const SWAP_ITEMS: usize = 3;

pub static SWAP_CLASS: MeterClass = MeterClass {
    name: "Swap",
    caption: "Swp",
    default_mode: MeterMode::Bar,
    bar_items: SWAP_ITEMS,
    slots: &[
        SlotInfo {
            label: "used",
            attr: ColorElement::Swap,
            text_attr: ColorElement::Swap,
            optional: false,
        },
        SlotInfo {
            label: "cache",
            attr: ColorElement::SwapCache,
            text_attr: ColorElement::SwapCache,
            optional: true,
        },
        SlotInfo {
            label: "frontswap",
            attr: ColorElement::SwapFrontswap,
            text_attr: ColorElement::SwapFrontswap,
            optional: true,
        },
    ],
};

/// Source of swap readings.
pub trait SwapPlatform {
    fn unit(&self) -> UnitPrefix {
        UnitPrefix::Kibi
    }

    /// Writes the total and every slot the platform can report into `data`.
    fn set_swap_values(&self, data: &mut MeterData<SWAP_ITEMS>) -> Result<(), CollectError>;
}

pub struct SwapMeter<P: SwapPlatform> {
    platform: P,
    unit: UnitPrefix,
    data: MeterData<SWAP_ITEMS>,
    txt: MeterBuffer,
}

impl<P: SwapPlatform> SwapMeter<P> {
    pub fn new(platform: P) -> Self {
        let unit = platform.unit();
        Self {
            platform,
            unit,
            data: MeterData::new(&SWAP_CLASS),
            txt: MeterBuffer::new(),
        }
    }

    pub fn data(&self) -> &MeterData<SWAP_ITEMS> {
        &self.data
    }
}

impl<P: SwapPlatform> Meter for SwapMeter<P> {
    fn class(&self) -> &'static MeterClass {
        &SWAP_CLASS
    }

    fn update_values(&mut self) {
        self.data.reset_optional(&SWAP_CLASS);
        if let Err(e) = self.platform.set_swap_values(&mut self.data) {
            warn!(meter = SWAP_CLASS.name, error = %e, "failed to sample swap");
        }

        let used = self.data.get_or_zero(SwapSlot::Used);
        write_compact(&mut self.txt, used, self.data.total(), self.unit);
        trace!(meter = SWAP_CLASS.name, values = ?self.data.values(), text = %self.txt, "sampled");
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
        write_detailed(out, &SWAP_CLASS, &self.data, self.unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSwap {
        total: f64,
        used: f64,
        cache: Option<f64>,
        frontswap: Option<f64>,
    }

    impl SwapPlatform for FixedSwap {
        fn set_swap_values(&self, data: &mut MeterData<SWAP_ITEMS>) -> Result<(), CollectError> {
            data.set_total(self.total);
            data.set(SwapSlot::Used, self.used);
            if let Some(v) = self.cache {
                data.set(SwapSlot::Cache, v);
            }
            if let Some(v) = self.frontswap {
                data.set(SwapSlot::Frontswap, v);
            }
            Ok(())
        }
    }

    fn detailed(meter: &dyn Meter) -> String {
        let mut out = RichLine::new();
        meter.display(&mut out);
        out.text()
    }

    #[test]
    fn test_swap_without_optional_slots() {
        let mut meter = SwapMeter::new(FixedSwap {
            total: 4096000.0,
            used: 1024000.0,
            cache: None,
            frontswap: None,
        });
        meter.update_values();

        assert_eq!(meter.text(), "1000M/3.91G");
        assert_eq!(detailed(&meter), ":3.91G used:1000M");
    }

    #[test]
    fn test_swap_with_cache_and_frontswap() {
        let mut meter = SwapMeter::new(FixedSwap {
            total: 4096000.0,
            used: 729856.0,
            cache: Some(33000.0),
            frontswap: Some(262144.0),
        });
        meter.update_values();

        assert_eq!(meter.text(), "713M/3.91G");
        assert_eq!(
            detailed(&meter),
            ":3.91G used:713M cache:32.2M frontswap:256M"
        );
        assert_eq!(meter.bar_values().len(), 3);
    }

    #[test]
    fn test_optional_slots_reset_between_samples() {
        let mut meter = SwapMeter::new(FixedSwap {
            total: 100.0,
            used: 10.0,
            cache: Some(5.0),
            frontswap: None,
        });
        meter.update_values();
        assert_eq!(meter.data().get(SwapSlot::Cache), Some(5.0));

        meter.platform.cache = None;
        meter.update_values();
        assert_eq!(meter.data().get(SwapSlot::Cache), None);
    }
}
