//! Logging abstraction
//!
//! Unified logging macros that work across targets:
//! - Embedded (`defmt` feature): routed to defmt
//! - Host tests: `println!`
//! - Anything else: no-op
//!
//! The node's own error policy is silent absorption, so these macros are a
//! trace facility, not a control path: nothing reads them back.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::info!($($arg)*);

        #[cfg(test)]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_format_args() {
        log_info!("{} started", "serial_receiver");
        log_warn!("serial write failed: {:?}", "WriteFailed");
        log_debug!("queue full, {} dropped", 1);
    }
}
