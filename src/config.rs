//! System configuration parameters
//!
//! Build-time defaults for the indicator firmware. There is no runtime
//! override source; `validate()` guards edits to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// ESP-IDF refuses an RX ring buffer that does not exceed the hardware FIFO.
const UART_HW_FIFO_LEN: usize = 128;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    // --- Serial link ---
    /// UART baud rate shared with the detection host
    pub baud_rate: u32,
    /// UART driver receive ring buffer (bytes)
    pub uart_rx_buffer: usize,

    // --- Supervision ---
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            uart_rx_buffer: 256,
            watchdog_timeout_ms: 10_000,
        }
    }
}

impl IndicatorConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<()> {
        if !(1_200..=921_600).contains(&self.baud_rate) {
            return Err(Error::Config("baud_rate must be 1200–921600"));
        }
        if self.uart_rx_buffer <= UART_HW_FIFO_LEN {
            return Err(Error::Config("uart_rx_buffer must exceed the 128-byte UART FIFO"));
        }
        if !(1_000..=60_000).contains(&self.watchdog_timeout_ms) {
            return Err(Error::Config("watchdog_timeout_ms must be 1000–60000"));
        }
        Ok(())
    }
}
