//! Shared identifiers and task configuration
//!
//! This module defines the closed task identity set, the scheduler tick
//! resolution and the static per-task configuration (period and deadline).

/// Microseconds per scheduler tick (1 kHz tick, matching the node's
/// millisecond scheduler resolution).
pub const TICK_US: u64 = 1_000;

/// Convert a tick count to an embassy duration.
#[cfg(feature = "embassy")]
pub fn tick_duration(ticks: u32) -> embassy_time::Duration {
    embassy_time::Duration::from_micros(ticks as u64 * TICK_US)
}

/// Identity of every flow of control in the node, including the idle
/// interval.
///
/// The variant set is closed on purpose: task identity stamps messages,
/// selects the timing-trace slot and correlates log output, so an arbitrary
/// integer tag would lose type safety without gaining anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    /// Button monitor on input A
    Button1,
    /// Button monitor on input B
    Button2,
    /// Periodic heartbeat transmitter
    Transmitter,
    /// Serial receiver (queue consumer)
    Receiver,
    /// Background load simulator, short period
    Load1,
    /// Background load simulator, long period
    Load2,
    /// Idle interval between task releases
    Idle,
}

impl TaskId {
    /// Number of trace slots, one per variant.
    pub const COUNT: usize = 7;

    /// All identities, in trace-slot order.
    pub const ALL: [TaskId; TaskId::COUNT] = [
        TaskId::Button1,
        TaskId::Button2,
        TaskId::Transmitter,
        TaskId::Receiver,
        TaskId::Load1,
        TaskId::Load2,
        TaskId::Idle,
    ];

    /// Timing-trace slot index.
    pub const fn index(self) -> usize {
        match self {
            TaskId::Button1 => 0,
            TaskId::Button2 => 1,
            TaskId::Transmitter => 2,
            TaskId::Receiver => 3,
            TaskId::Load1 => 4,
            TaskId::Load2 => 5,
            TaskId::Idle => 6,
        }
    }

    /// Single-byte correlation tag for external tooling.
    ///
    /// Matches the message identifiers the node has always reported on the
    /// wire: `'1'..'6'` for the tasks, `'0'` for idle.
    pub const fn tag(self) -> u8 {
        match self {
            TaskId::Button1 => b'1',
            TaskId::Button2 => b'2',
            TaskId::Transmitter => b'3',
            TaskId::Receiver => b'4',
            TaskId::Load1 => b'5',
            TaskId::Load2 => b'6',
            TaskId::Idle => b'0',
        }
    }

    /// Human-readable name for logging.
    pub const fn name(self) -> &'static str {
        match self {
            TaskId::Button1 => "button_1_monitor",
            TaskId::Button2 => "button_2_monitor",
            TaskId::Transmitter => "periodic_transmitter",
            TaskId::Receiver => "serial_receiver",
            TaskId::Load1 => "load_1_simulation",
            TaskId::Load2 => "load_2_simulation",
            TaskId::Idle => "idle",
        }
    }
}

/// Static configuration of a periodic task.
///
/// The deadline is informational: it is handed to the external scheduler at
/// task creation and enforced there, not by the task body.
#[derive(Debug, Clone, Copy)]
pub struct TaskConfig {
    /// Task identity (also the trace slot and message tag)
    pub id: TaskId,

    /// Release period in scheduler ticks
    pub period_ticks: u32,

    /// Relative deadline in scheduler ticks
    pub deadline_ticks: u32,
}

impl TaskConfig {
    /// Release period in microseconds.
    #[inline]
    pub const fn period_us(&self) -> u64 {
        self.period_ticks as u64 * TICK_US
    }

    /// Relative deadline in microseconds.
    #[inline]
    pub const fn deadline_us(&self) -> u64 {
        self.deadline_ticks as u64 * TICK_US
    }

    /// Task name, from the identity.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }
}
