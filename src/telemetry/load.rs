//! CPU load calculation
//!
//! Utilization is derived from the idle slot of the timing trace:
//! `load = 100% - idle_busy_in_window / window`. The monitor snapshots the
//! idle slot's cumulative busy time and subtracts the previous snapshot, so
//! cumulative counters are never misread as instantaneous load.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::telemetry::trace;
use crate::types::TaskId;

/// Sampling period of the periodic monitor, in scheduler ticks.
#[cfg(feature = "embassy")]
pub const LOAD_SAMPLE_PERIOD_TICKS: u32 = 1_000;

/// Published load figure for external reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemLoad {
    /// CPU load as percentage (0-100)
    pub cpu_load_percent: u8,

    /// Duration of the window the figure was computed over, in microseconds
    pub window_us: u64,

    /// Timestamp of the sample point in microseconds
    pub sampled_at_us: u64,
}

impl SystemLoad {
    const EMPTY: SystemLoad = SystemLoad {
        cpu_load_percent: 0,
        window_us: 0,
        sampled_at_us: 0,
    };
}

/// Published value; written only by the load monitor, read by reporting.
static SYSTEM_LOAD: Mutex<CriticalSectionRawMutex, RefCell<SystemLoad>> =
    Mutex::new(RefCell::new(SystemLoad::EMPTY));

/// Latest published load figure.
pub fn system_load() -> SystemLoad {
    SYSTEM_LOAD.lock(|cell| *cell.borrow())
}

/// Windowed CPU load monitor.
///
/// Owns the snapshot state between sample points; only one instance should
/// run per node.
#[derive(Debug)]
pub struct LoadMonitor {
    last_sample_us: u64,
    last_idle_busy_us: u64,
}

impl LoadMonitor {
    /// Create a monitor whose first window starts at time zero.
    pub const fn new() -> Self {
        Self {
            last_sample_us: 0,
            last_idle_busy_us: 0,
        }
    }

    /// Compute the load over the window since the previous sample point and
    /// publish it.
    ///
    /// An empty window republishes the previous figure.
    pub fn sample(&mut self, now_us: u64) -> u8 {
        let idle_busy_us = trace::record(TaskId::Idle).busy_us;
        let window_us = now_us.saturating_sub(self.last_sample_us);
        let idle_delta_us = idle_busy_us.saturating_sub(self.last_idle_busy_us);

        self.last_sample_us = now_us;
        self.last_idle_busy_us = idle_busy_us;

        if window_us == 0 {
            return system_load().cpu_load_percent;
        }

        let idle_percent = (idle_delta_us.saturating_mul(100) / window_us).min(100) as u8;
        let load = 100 - idle_percent;

        SYSTEM_LOAD.lock(|cell| {
            *cell.borrow_mut() = SystemLoad {
                cpu_load_percent: load,
                window_us,
                sampled_at_us: now_us,
            };
        });

        load
    }

    /// Periodic sampling loop on the embassy time driver.
    #[cfg(feature = "embassy")]
    pub async fn run(&mut self) -> ! {
        use embassy_time::Ticker;

        use crate::log_debug;
        use crate::types::tick_duration;

        let mut ticker = Ticker::every(tick_duration(LOAD_SAMPLE_PERIOD_TICKS));
        loop {
            ticker.next().await;
            let load = self.sample(trace::current_time_us());
            log_debug!("cpu load: {}%", load);
        }
    }
}

impl Default for LoadMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reset the published figure (for testing only).
#[cfg(test)]
pub(crate) fn reset_load() {
    SYSTEM_LOAD.lock(|cell| *cell.borrow_mut() = SystemLoad::EMPTY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::trace::{reset_trace, task_in, task_out};

    fn reset() {
        reset_trace();
        reset_load();
    }

    #[test]
    #[serial_test::serial]
    fn test_all_idle_window_reads_zero_load() {
        reset();

        task_in(TaskId::Idle, 0);
        task_out(TaskId::Idle, 1_000_000);

        let mut monitor = LoadMonitor::new();
        assert_eq!(monitor.sample(1_000_000), 0);
    }

    #[test]
    #[serial_test::serial]
    fn test_no_idle_window_reads_full_load() {
        reset();

        let mut monitor = LoadMonitor::new();
        assert_eq!(monitor.sample(1_000_000), 100);
    }

    #[test]
    #[serial_test::serial]
    fn test_half_idle_window_reads_half_load() {
        reset();

        task_in(TaskId::Idle, 0);
        task_out(TaskId::Idle, 500_000);

        let mut monitor = LoadMonitor::new();
        assert_eq!(monitor.sample(1_000_000), 50);
    }

    #[test]
    #[serial_test::serial]
    fn test_windows_are_independent_snapshots() {
        reset();

        let mut monitor = LoadMonitor::new();

        // First window: fully idle.
        task_in(TaskId::Idle, 0);
        task_out(TaskId::Idle, 1_000_000);
        assert_eq!(monitor.sample(1_000_000), 0);

        // Second window: the idle accumulator does not move, so the node
        // was busy the whole time.
        assert_eq!(monitor.sample(2_000_000), 100);
    }

    #[test]
    #[serial_test::serial]
    fn test_sample_publishes_system_load() {
        reset();

        task_in(TaskId::Idle, 0);
        task_out(TaskId::Idle, 750_000);

        let mut monitor = LoadMonitor::new();
        let load = monitor.sample(1_000_000);

        let published = system_load();
        assert_eq!(published.cpu_load_percent, load);
        assert_eq!(published.cpu_load_percent, 25);
        assert_eq!(published.window_us, 1_000_000);
        assert_eq!(published.sampled_at_us, 1_000_000);
    }

    #[test]
    #[serial_test::serial]
    fn test_empty_window_keeps_previous_figure() {
        reset();

        task_in(TaskId::Idle, 0);
        task_out(TaskId::Idle, 400_000);

        let mut monitor = LoadMonitor::new();
        let first = monitor.sample(1_000_000);
        assert_eq!(first, 60);
        assert_eq!(monitor.sample(1_000_000), first);
    }
}
