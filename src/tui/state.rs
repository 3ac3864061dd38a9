//! Application state for the meter dashboard.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::meter::{Meter, MeterMode};

/// One meter shown on its own line.
pub struct MeterRow {
    pub meter: Box<dyn Meter>,
    pub mode: MeterMode,
}

/// Dashboard state shared between input handling and rendering.
pub struct AppState {
    pub rows: Vec<MeterRow>,
    /// Whether periodic refresh is paused.
    pub paused: bool,
    /// Wall-clock time of the last sample.
    pub last_update: Option<DateTime<Local>>,
    /// Number of samples taken so far.
    pub samples: u64,
}

impl AppState {
    /// Creates a dashboard where every meter starts in `mode`, or in its
    /// class default when `mode` is `None`.
    pub fn new(meters: Vec<Box<dyn Meter>>, mode: Option<MeterMode>) -> Self {
        let rows = meters
            .into_iter()
            .map(|meter| {
                let mode = mode.unwrap_or(meter.class().default_mode);
                MeterRow { meter, mode }
            })
            .collect();
        Self {
            rows,
            paused: false,
            last_update: None,
            samples: 0,
        }
    }

    /// Samples every meter once.
    pub fn refresh(&mut self) {
        for row in &mut self.rows {
            row.meter.update_values();
        }
        self.samples += 1;
        self.last_update = Some(Local::now());
        debug!(samples = self.samples, "meters refreshed");
    }

    /// Switches every meter to its next display mode.
    pub fn cycle_modes(&mut self) {
        for row in &mut self.rows {
            row.mode = row.mode.next();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{MockFs, ProcMemory};
    use crate::meter::{MemoryMeter, SwapMeter};

    fn dashboard(mode: Option<MeterMode>) -> AppState {
        let meters: Vec<Box<dyn Meter>> = vec![
            Box::new(MemoryMeter::new(ProcMemory::new(
                MockFs::typical_system(),
                "/proc",
            ))),
            Box::new(SwapMeter::new(ProcMemory::new(
                MockFs::typical_system(),
                "/proc",
            ))),
        ];
        AppState::new(meters, mode)
    }

    #[test]
    fn test_new_uses_class_default_mode() {
        let state = dashboard(None);
        assert!(state.rows.iter().all(|row| row.mode == MeterMode::Bar));
        assert_eq!(state.samples, 0);
        assert!(state.last_update.is_none());
    }

    #[test]
    fn test_new_with_explicit_mode() {
        let state = dashboard(Some(MeterMode::Text));
        assert!(state.rows.iter().all(|row| row.mode == MeterMode::Text));
    }

    #[test]
    fn test_refresh_samples_every_meter() {
        let mut state = dashboard(None);
        state.refresh();

        assert_eq!(state.samples, 1);
        assert!(state.last_update.is_some());
        assert_eq!(state.rows[0].meter.text(), "5.13G/15.6G");
        assert_eq!(state.rows[1].meter.text(), "0K/3.91G");
    }

    #[test]
    fn test_cycle_modes() {
        let mut state = dashboard(None);
        state.cycle_modes();
        assert!(state.rows.iter().all(|row| row.mode == MeterMode::Text));
        state.cycle_modes();
        assert!(state.rows.iter().all(|row| row.mode == MeterMode::Bar));
    }
}
