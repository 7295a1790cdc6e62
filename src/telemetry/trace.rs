//! Per-task timing trace and liveness counters
//!
//! One record per [`TaskId`], written only through that task's own entry and
//! exit hooks and read by the load monitor and an external health poller.
//! The idle slot is fed the same way: the integrating firmware calls
//! [`task_in`] / [`task_out`] with [`TaskId::Idle`] from its idle hook.
//!
//! Busy time accumulates monotonically in `u64` microseconds with saturating
//! arithmetic; there is no reset during the process lifetime.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::types::TaskId;

/// Timing record for a single task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingRecord {
    /// Timestamp of the last entry hook in microseconds
    pub last_entry_us: u64,

    /// Timestamp of the last exit hook in microseconds
    pub last_exit_us: u64,

    /// Accumulated busy time in microseconds (saturating, never reset)
    pub busy_us: u64,

    /// Completed invocations (liveness counter, increments at most once per
    /// invocation and never decreases)
    pub invocations: u32,
}

impl TimingRecord {
    const EMPTY: TimingRecord = TimingRecord {
        last_entry_us: 0,
        last_exit_us: 0,
        busy_us: 0,
        invocations: 0,
    };

    fn enter(&mut self, now_us: u64) {
        self.last_entry_us = now_us;
    }

    fn exit(&mut self, now_us: u64) {
        self.last_exit_us = now_us;
        self.busy_us = self
            .busy_us
            .saturating_add(now_us.saturating_sub(self.last_entry_us));
        self.invocations = self.invocations.saturating_add(1);
    }
}

/// Trace storage, one slot per task plus idle.
///
/// Each slot has a single writer (the owning task's hooks); the mutex only
/// guards against concurrent readers sampling a half-written record.
static RECORDS: Mutex<CriticalSectionRawMutex, RefCell<[TimingRecord; TaskId::COUNT]>> =
    Mutex::new(RefCell::new([TimingRecord::EMPTY; TaskId::COUNT]));

/// Entry hook: the task (or idle interval) started executing at `now_us`.
pub fn task_in(id: TaskId, now_us: u64) {
    RECORDS.lock(|cell| cell.borrow_mut()[id.index()].enter(now_us));
}

/// Exit hook: the task (or idle interval) stopped executing at `now_us`.
///
/// Accumulates the busy time since the matching [`task_in`] and bumps the
/// liveness counter.
pub fn task_out(id: TaskId, now_us: u64) {
    RECORDS.lock(|cell| cell.borrow_mut()[id.index()].exit(now_us));
}

/// Snapshot of a task's timing record.
pub fn record(id: TaskId) -> TimingRecord {
    RECORDS.lock(|cell| cell.borrow()[id.index()])
}

/// Completed-invocation count for external health monitoring.
pub fn invocation_count(id: TaskId) -> u32 {
    record(id).invocations
}

/// Run one task invocation between its entry and exit hooks.
///
/// `entry_us` is the release timestamp the caller already took; the exit
/// timestamp is read after the body returns.
pub fn run_traced<F, R>(id: TaskId, entry_us: u64, f: F) -> R
where
    F: FnOnce() -> R,
{
    task_in(id, entry_us);
    let result = f();
    task_out(id, current_time_us());
    result
}

/// Get current time in microseconds (embassy time driver).
#[cfg(feature = "embassy")]
pub fn current_time_us() -> u64 {
    embassy_time::Instant::now().as_micros()
}

/// Get current time in microseconds (host tests).
#[cfg(all(not(feature = "embassy"), test))]
pub fn current_time_us() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// Placeholder for builds with neither a time driver nor std.
#[cfg(all(not(feature = "embassy"), not(test)))]
pub fn current_time_us() -> u64 {
    0
}

/// Reset the trace storage (for testing only).
#[cfg(test)]
pub(crate) fn reset_trace() {
    RECORDS.lock(|cell| *cell.borrow_mut() = [TimingRecord::EMPTY; TaskId::COUNT]);
}
