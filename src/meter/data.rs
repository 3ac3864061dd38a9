//! Fixed-capacity value array of a meter.

use super::class::MeterClass;

/// Slot role enum of a meter type; the index is the slot's fixed position.
pub trait Slot: Copy {
    fn index(self) -> usize;
}

/// Values of one meter: `N` slots, each either a reading or `None` when the
/// platform cannot report that quantity, plus the reference total.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterData<const N: usize> {
    values: [Option<f64>; N],
    cur_items: usize,
    total: f64,
}

impl<const N: usize> MeterData<N> {
    /// Creates data for a meter of `class` with every slot unsupported.
    ///
    /// The number of bar items is fixed here from the class and never changes.
    pub fn new(class: &MeterClass) -> Self {
        Self {
            values: [None; N],
            cur_items: class.bar_items.min(N),
            total: 0.0,
        }
    }

    pub fn get<S: Slot>(&self, slot: S) -> Option<f64> {
        self.values[slot.index()]
    }

    /// Value of a slot the platform always reports; zero before the first sample.
    pub fn get_or_zero<S: Slot>(&self, slot: S) -> f64 {
        self.get(slot).unwrap_or(0.0)
    }

    pub fn set<S: Slot>(&mut self, slot: S, value: f64) {
        self.values[slot.index()] = Some(value);
    }

    /// Marks every platform-dependent slot of `class` as unsupported.
    pub fn reset_optional(&mut self, class: &MeterClass) {
        for (value, info) in self.values.iter_mut().zip(class.slots) {
            if info.optional {
                *value = None;
            }
        }
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Slots that take part in bar mode.
    pub fn bar_values(&self) -> &[Option<f64>] {
        &self.values[..self.cur_items]
    }

    pub fn cur_items(&self) -> usize {
        self.cur_items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}
