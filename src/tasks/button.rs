//! Button monitor task and edge detection
//!
//! Each monitor samples its digital input once per 50-tick period and
//! compares the level against the sample from the previous period. Only
//! transitions produce a message; steady levels produce nothing. There is no
//! debouncing beyond that single before/after comparison, so edges shorter
//! than one period can be missed.

use crate::message::Message;
use crate::platform::GpioInterface;
use crate::types::TaskConfig;

/// Classification of two consecutive samples of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Level unchanged since the previous sample
    NoChange,
    /// 0 -> 1 transition
    Rising,
    /// 1 -> 0 transition
    Falling,
}

/// Retained edge-detection state for one input.
///
/// Owned exclusively by its button monitor; the first sample only primes
/// the detector and can never report an edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    previous: Option<bool>,
}

impl EdgeDetector {
    /// Create an unprimed detector.
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Classify the new sample against the retained one and store it.
    pub fn update(&mut self, level: bool) -> Edge {
        let edge = match self.previous {
            Some(false) if level => Edge::Rising,
            Some(true) if !level => Edge::Falling,
            _ => Edge::NoChange,
        };
        self.previous = Some(level);
        edge
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic button monitor.
///
/// The input pin stays with the external driver; the monitor only keeps its
/// identity, edge state and report texts.
#[derive(Debug)]
pub struct ButtonMonitor {
    config: TaskConfig,
    detector: EdgeDetector,
    rising_text: &'static str,
    falling_text: &'static str,
}

impl ButtonMonitor {
    /// Monitor for input A.
    pub const fn button_1() -> Self {
        Self::new(
            super::BUTTON_1_CONFIG,
            "Button 1: Rising\n",
            "Button 1: Falling\n",
        )
    }

    /// Monitor for input B.
    pub const fn button_2() -> Self {
        Self::new(
            super::BUTTON_2_CONFIG,
            "Button 2: Rising\n",
            "Button 2: Falling\n",
        )
    }

    const fn new(config: TaskConfig, rising_text: &'static str, falling_text: &'static str) -> Self {
        Self {
            config,
            detector: EdgeDetector::new(),
            rising_text,
            falling_text,
        }
    }

    /// One invocation: sample the input and report a transition, if any.
    pub fn poll<G: GpioInterface>(&mut self, pin: &G) -> Option<Message> {
        match self.detector.update(pin.read()) {
            Edge::Rising => Some(Message::new(self.config.id, self.rising_text)),
            Edge::Falling => Some(Message::new(self.config.id, self.falling_text)),
            Edge::NoChange => None,
        }
    }

    /// Periodic monitor loop on the embassy time driver.
    ///
    /// Edge reports that do not fit into the queue within
    /// [`super::SEND_WAIT_TICKS`] are dropped.
    #[cfg(feature = "embassy")]
    pub async fn run<G: GpioInterface>(
        &mut self,
        pin: &G,
        queue: &crate::queue::MessageQueue,
    ) -> ! {
        use embassy_time::Ticker;

        use crate::telemetry::trace;
        use crate::types::tick_duration;
        use crate::{log_debug, log_info};

        log_info!("{} started", self.config.name());

        let mut ticker = Ticker::every(tick_duration(self.config.period_ticks));
        loop {
            ticker.next().await;

            let entry_us = trace::current_time_us();
            let produced = trace::run_traced(self.config.id, entry_us, || self.poll(pin));

            if let Some(message) = produced {
                if queue
                    .send_bounded(message, super::SEND_WAIT_TICKS)
                    .await
                    .is_err()
                {
                    log_debug!("{}: queue full, edge report dropped", self.config.name());
                }
            }
        }
    }
}
