//! Background load simulation tasks
//!
//! Deliberate CPU burners that stand in for real workload so the node's
//! scheduling and load accounting can be observed under pressure. The burn
//! is a calibrated duration-based spin, not an iteration count, so the
//! consumed time is portable across clock speeds and optimization levels.
//! No messages are produced.

use crate::types::TaskConfig;

/// Busy time of the short-period simulator per release, in microseconds.
pub const LOAD_1_BUSY_US: u64 = 5_000;

/// Busy time of the long-period simulator per release, in microseconds.
pub const LOAD_2_BUSY_US: u64 = 12_000;

/// Periodic CPU load simulator.
#[derive(Debug)]
pub struct LoadSimulator {
    config: TaskConfig,
    busy_us: u64,
}

impl LoadSimulator {
    /// Short-period simulator: ~5 ms of every 10-tick period.
    pub const fn load_1() -> Self {
        Self {
            config: super::LOAD_1_CONFIG,
            busy_us: LOAD_1_BUSY_US,
        }
    }

    /// Long-period simulator: ~12 ms of every 100-tick period.
    pub const fn load_2() -> Self {
        Self {
            config: super::LOAD_2_CONFIG,
            busy_us: LOAD_2_BUSY_US,
        }
    }

    /// Configured busy time per release, in microseconds.
    pub const fn busy_us(&self) -> u64 {
        self.busy_us
    }

    /// Burn CPU until the configured busy time has elapsed.
    #[cfg(feature = "embassy")]
    fn spin(&self) {
        use embassy_time::{Duration, Instant};

        let until = Instant::now() + Duration::from_micros(self.busy_us);
        while Instant::now() < until {
            core::hint::spin_loop();
        }
    }

    /// Periodic burn loop on the embassy time driver.
    #[cfg(feature = "embassy")]
    pub async fn run(&self) -> ! {
        use embassy_time::Ticker;

        use crate::log_info;
        use crate::telemetry::trace;
        use crate::types::tick_duration;

        log_info!("{} started", self.config.name());

        let mut ticker = Ticker::every(tick_duration(self.config.period_ticks));
        loop {
            ticker.next().await;

            let entry_us = trace::current_time_us();
            trace::run_traced(self.config.id, entry_us, || self.spin());
        }
    }
}
