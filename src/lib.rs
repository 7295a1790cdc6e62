#![cfg_attr(not(test), no_std)]

//! edge_relay - Periodic monitoring task set for a small embedded node
//!
//! This library provides the application layer of a real-time monitoring
//! node: two button monitors, a periodic heartbeat transmitter, two CPU load
//! simulators and a serial receiver, all communicating through one bounded
//! message queue. Each task feeds an entry/exit timing trace that a load
//! monitor turns into a CPU utilization figure.
//!
//! The scheduler (any embassy-compatible executor) and the physical GPIO and
//! UART drivers are external; the crate consumes them through the `platform`
//! traits and the `embassy` feature.

// Platform abstraction layer (GPIO/UART traits, errors, mock drivers)
pub mod platform;

// Logging macros (defmt on target, println in host tests)
pub mod logging;

// Shared identifiers and task configuration
pub mod types;

// Inter-task message and the bounded queue
pub mod message;
pub mod queue;

// Timing trace, liveness counters and CPU load accounting
pub mod telemetry;

// Periodic task bodies
pub mod tasks;
