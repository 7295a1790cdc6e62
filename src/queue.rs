//! Bounded inter-task message queue
//!
//! A fixed-capacity FIFO shared by the five producer tasks and the single
//! consumer. Synchronization and wake-up live entirely inside the queue;
//! callers never see its internals. Ordering is global arrival order across
//! all producers, with no per-producer guarantee relative to each other.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};

use crate::message::Message;

/// Number of message slots.
pub const QUEUE_CAPACITY: usize = 3;

/// A bounded send gave up after its wait expired.
///
/// Producers absorb this silently: the message is dropped, not retried
/// (freshness over completeness).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

/// Fixed-capacity FIFO of [`Message`] values.
///
/// Const-constructible so it can live in a `static` shared by all tasks.
pub struct MessageQueue {
    inner: Channel<CriticalSectionRawMutex, Message, QUEUE_CAPACITY>,
}

impl MessageQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Push without waiting; returns the message back if the queue is full.
    pub fn try_send(&self, message: Message) -> Result<(), Message> {
        self.inner.try_send(message).map_err(|err| match err {
            TrySendError::Full(message) => message,
        })
    }

    /// Pop without waiting.
    pub fn try_receive(&self) -> Option<Message> {
        self.inner.try_receive().ok()
    }

    /// Push with a bounded wait, giving up after `wait_ticks`.
    ///
    /// On timeout the message is dropped and the queue is left unchanged.
    #[cfg(feature = "embassy")]
    pub async fn send_bounded(&self, message: Message, wait_ticks: u32) -> Result<(), QueueFull> {
        let wait = crate::types::tick_duration(wait_ticks);
        match embassy_time::with_timeout(wait, self.inner.send(message)).await {
            Ok(()) => Ok(()),
            Err(_) => Err(QueueFull),
        }
    }

    /// Pop with a bounded wait, giving up after `wait_ticks`.
    ///
    /// `None` after the wait is normal steady-state behavior for the
    /// consumer, not an error.
    #[cfg(feature = "embassy")]
    pub async fn receive_bounded(&self, wait_ticks: u32) -> Option<Message> {
        let wait = crate::types::tick_duration(wait_ticks);
        embassy_time::with_timeout(wait, self.inner.receive())
            .await
            .ok()
    }

    /// Current number of queued messages.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the queue holds no messages.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Fixed slot count.
    pub const fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    fn message(source: TaskId, text: &str) -> Message {
        Message::new(source, text)
    }

    #[test]
    fn test_fifo_order_across_producers() {
        let queue = MessageQueue::new();

        queue
            .try_send(message(TaskId::Button1, "Button 1: Rising\n"))
            .unwrap();
        queue
            .try_send(message(TaskId::Transmitter, "Periodic String\n"))
            .unwrap();
        queue
            .try_send(message(TaskId::Button2, "Button 2: Falling\n"))
            .unwrap();

        assert_eq!(queue.try_receive().unwrap().source(), TaskId::Button1);
        assert_eq!(queue.try_receive().unwrap().source(), TaskId::Transmitter);
        assert_eq!(queue.try_receive().unwrap().source(), TaskId::Button2);
        assert!(queue.try_receive().is_none());
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let queue = MessageQueue::new();

        for _ in 0..QUEUE_CAPACITY {
            queue
                .try_send(message(TaskId::Transmitter, "Periodic String\n"))
                .unwrap();
        }
        assert_eq!(queue.len(), QUEUE_CAPACITY);

        // A fourth send must fail and hand the message back untouched.
        let rejected = queue
            .try_send(message(TaskId::Button1, "Button 1: Rising\n"))
            .unwrap_err();
        assert_eq!(rejected.text(), b"Button 1: Rising\n");
        assert_eq!(queue.len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_drop_on_full_leaves_queue_unchanged() {
        let queue = MessageQueue::new();

        for _ in 0..QUEUE_CAPACITY {
            queue
                .try_send(message(TaskId::Transmitter, "Periodic String\n"))
                .unwrap();
        }

        // Failed send: nothing delivered, nothing duplicated.
        let _ = queue.try_send(message(TaskId::Button2, "Button 2: Rising\n"));

        let mut drained = 0;
        while let Some(received) = queue.try_receive() {
            assert_eq!(received.source(), TaskId::Transmitter);
            drained += 1;
        }
        assert_eq!(drained, QUEUE_CAPACITY);
    }

    #[test]
    fn test_empty_receive_is_a_no_op() {
        let queue = MessageQueue::new();
        assert!(queue.is_empty());
        assert!(queue.try_receive().is_none());
        assert!(queue.is_empty());
    }
}
