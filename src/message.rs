//! Inter-task message type
//!
//! One message is produced per qualifying task invocation and copied by
//! value into and out of the queue; there is no shared ownership.

use crate::types::TaskId;

/// Maximum message text length in bytes.
///
/// Fixed by the node's wire format: one tag byte plus up to 20 payload
/// bytes per queue slot.
pub const TEXT_CAPACITY: usize = 20;

/// A tagged payload unit: the producing task's identity plus a short ASCII,
/// newline-terminated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    source: TaskId,
    text: heapless::Vec<u8, TEXT_CAPACITY>,
}

impl Message {
    /// Build a message, truncating the text to [`TEXT_CAPACITY`] bytes.
    pub fn new(source: TaskId, text: &str) -> Self {
        let bytes = text.as_bytes();
        let take = bytes.len().min(TEXT_CAPACITY);

        let mut buf = heapless::Vec::new();
        // Cannot fail: the slice was just clamped to the capacity.
        let _ = buf.extend_from_slice(&bytes[..take]);

        Self { source, text: buf }
    }

    /// Identity of the producing task.
    #[inline]
    pub const fn source(&self) -> TaskId {
        self.source
    }

    /// Correlation tag byte of the producing task.
    #[inline]
    pub const fn tag(&self) -> u8 {
        self.source.tag()
    }

    /// Text payload, forwarded verbatim by the consumer.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}
