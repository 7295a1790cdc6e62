//! Periodic task bodies
//!
//! The node's fixed task set. Each task owns its per-invocation logic as a
//! plain method (`poll` / `forward`) so it runs in host tests, and gains an
//! embassy runner (`run`) under the `embassy` feature:
//! 1. `Ticker` release on an absolute schedule (no drift accumulation)
//! 2. Entry/exit trace hooks around the body
//! 3. Bounded queue operations with drop-on-timeout
//!
//! | Task | Period (ticks) | Deadline (ticks) |
//! |---|---|---|
//! | button monitors | 50 | 50 |
//! | periodic transmitter | 100 | 100 |
//! | serial receiver | 20 | 20 |
//! | load simulator 1 | 10 | 10 |
//! | load simulator 2 | 100 | 100 |

pub mod button;
pub mod load_sim;
pub mod receiver;
pub mod transmitter;

pub use button::{ButtonMonitor, Edge, EdgeDetector};
pub use load_sim::LoadSimulator;
pub use receiver::SerialReceiver;
pub use transmitter::PeriodicTransmitter;

use crate::types::{TaskConfig, TaskId};

/// Bounded wait for a producer-side send, in scheduler ticks.
///
/// A send that does not complete within this window drops its message;
/// the producer prefers freshness over completeness.
pub const SEND_WAIT_TICKS: u32 = 10;

/// Bounded wait for the consumer-side receive, in scheduler ticks.
pub const RECEIVE_WAIT_TICKS: u32 = 10;

/// Button monitor on input A.
pub const BUTTON_1_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Button1,
    period_ticks: 50,
    deadline_ticks: 50,
};

/// Button monitor on input B.
pub const BUTTON_2_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Button2,
    period_ticks: 50,
    deadline_ticks: 50,
};

/// Heartbeat transmitter.
pub const TRANSMITTER_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Transmitter,
    period_ticks: 100,
    deadline_ticks: 100,
};

/// Queue consumer feeding the serial output.
pub const RECEIVER_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Receiver,
    period_ticks: 20,
    deadline_ticks: 20,
};

/// Short-period background load.
pub const LOAD_1_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Load1,
    period_ticks: 10,
    deadline_ticks: 10,
};

/// Long-period background load.
pub const LOAD_2_CONFIG: TaskConfig = TaskConfig {
    id: TaskId::Load2,
    period_ticks: 100,
    deadline_ticks: 100,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockUart};
    use crate::queue::MessageQueue;

    #[test]
    fn test_task_periods_match_the_node_design() {
        assert_eq!(BUTTON_1_CONFIG.period_ticks, 50);
        assert_eq!(BUTTON_2_CONFIG.period_ticks, 50);
        assert_eq!(TRANSMITTER_CONFIG.period_ticks, 100);
        assert_eq!(RECEIVER_CONFIG.period_ticks, 20);
        assert_eq!(LOAD_1_CONFIG.period_ticks, 10);
        assert_eq!(LOAD_2_CONFIG.period_ticks, 100);

        // Deadlines equal periods for every task in the set.
        for config in [
            BUTTON_1_CONFIG,
            BUTTON_2_CONFIG,
            TRANSMITTER_CONFIG,
            RECEIVER_CONFIG,
            LOAD_1_CONFIG,
            LOAD_2_CONFIG,
        ] {
            assert_eq!(config.deadline_ticks, config.period_ticks);
        }
    }

    #[test]
    fn test_rising_edge_produces_exactly_one_message() {
        let queue = MessageQueue::new();
        let mut pin = MockGpio::new_input();
        let mut monitor = ButtonMonitor::button_1();

        // Prime with the idle-low level.
        assert!(monitor.poll(&pin).is_none());

        // Input transitions 0 -> 1, then holds.
        pin.set_input_state(true);
        if let Some(message) = monitor.poll(&pin) {
            queue.try_send(message).unwrap();
        }
        assert!(monitor.poll(&pin).is_none());
        assert!(monitor.poll(&pin).is_none());

        let delivered = queue.try_receive().unwrap();
        assert_eq!(delivered.source(), TaskId::Button1);
        assert_eq!(delivered.text(), b"Button 1: Rising\n");
        assert!(queue.try_receive().is_none());
    }

    #[test]
    fn test_transmitter_messages_all_reach_the_output() {
        let queue = MessageQueue::new();
        let mut uart = MockUart::new(Default::default());
        let transmitter = PeriodicTransmitter::new();
        let receiver = SerialReceiver::new();

        // Five transmitter releases with the consumer always draining.
        for _ in 0..5 {
            queue.try_send(transmitter.poll()).unwrap();
            while let Some(message) = queue.try_receive() {
                receiver.forward(&mut uart, &message).unwrap();
            }
        }

        let expected = b"Periodic String\n".repeat(5);
        assert_eq!(uart.tx_buffer(), expected.as_slice());
    }

    #[test]
    fn test_output_preserves_queue_arrival_order() {
        let queue = MessageQueue::new();
        let mut uart = MockUart::new(Default::default());
        let receiver = SerialReceiver::new();

        let mut pin_a = MockGpio::new_input();
        let mut pin_b = MockGpio::with_level(true);
        let mut button_1 = ButtonMonitor::button_1();
        let mut button_2 = ButtonMonitor::button_2();
        let transmitter = PeriodicTransmitter::new();

        // Prime both detectors.
        assert!(button_1.poll(&pin_a).is_none());
        assert!(button_2.poll(&pin_b).is_none());

        pin_a.set_input_state(true);
        pin_b.set_input_state(false);

        queue.try_send(button_1.poll(&pin_a).unwrap()).unwrap();
        queue.try_send(transmitter.poll()).unwrap();
        queue.try_send(button_2.poll(&pin_b).unwrap()).unwrap();

        while let Some(message) = queue.try_receive() {
            receiver.forward(&mut uart, &message).unwrap();
        }

        assert_eq!(
            uart.tx_buffer(),
            b"Button 1: Rising\nPeriodic String\nButton 2: Falling\n".as_slice()
        );
    }
}
