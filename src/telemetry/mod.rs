//! Timing trace and CPU load accounting
//!
//! - `trace` records entry/exit timestamps, accumulated busy time and a
//!   liveness counter per task (including the idle interval).
//! - `load` turns the idle slot's busy time into a CPU utilization figure
//!   over a sampling window and publishes it for external reporting.

pub mod load;
pub mod trace;

pub use load::{LoadMonitor, SystemLoad, system_load};
pub use trace::{TimingRecord, invocation_count, record, run_traced, task_in, task_out};
