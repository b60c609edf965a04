//! Serial link adapter.
//!
//! Implements [`SignalSource`] (bytes from the detection host) and
//! [`EventSink`] (status lines back to it) over one UART.  Status lines
//! are terminated with `"\r\n"`.
//!
//! - **`target_os = "espidf"`** — wraps an `esp_idf_hal` `UartDriver`;
//!   reads use a zero-tick timeout so polling never blocks.
//! - **`not(target_os = "espidf")`** — in-memory simulation: bytes are
//!   queued with [`inject`](SerialAdapter::inject) and written output is
//!   collected, up to [`SIM_TX_CAPACITY`] bytes, for inspection.

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, SignalSource};
use crate::error::{Error, SerialError};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::{delay::NON_BLOCK, uart::UartDriver};

pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Simulated receive buffer capacity (bytes).
#[cfg(not(target_os = "espidf"))]
pub const SIM_RX_CAPACITY: usize = 64;

/// Simulated transmit buffer capacity (bytes).  Holds at least one status
/// line per byte of a full receive buffer.
#[cfg(not(target_os = "espidf"))]
pub const SIM_TX_CAPACITY: usize = 4096;

pub struct SerialAdapter {
    #[cfg(target_os = "espidf")]
    uart: UartDriver<'static>,

    #[cfg(not(target_os = "espidf"))]
    rx: heapless::Deque<u8, SIM_RX_CAPACITY>,
    #[cfg(not(target_os = "espidf"))]
    tx: heapless::Vec<u8, SIM_TX_CAPACITY>,
    #[cfg(not(target_os = "espidf"))]
    dropped_lines: u32,
}

#[cfg(target_os = "espidf")]
impl SerialAdapter {
    pub fn new(uart: UartDriver<'static>) -> Self {
        Self { uart }
    }

    fn write_line(&mut self, line: &str) {
        for mut data in [line.as_bytes(), LINE_TERMINATOR] {
            while !data.is_empty() {
                match self.uart.write(data) {
                    Ok(0) => {
                        warn!("UART: write accepted no bytes, dropping {} bytes", data.len());
                        return;
                    }
                    Ok(n) => data = &data[n..],
                    Err(e) => {
                        warn!("{}", Error::from(SerialError::WriteFailed(e.code())));
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(target_os = "espidf")]
impl SignalSource for SerialAdapter {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, NON_BLOCK) {
            Ok(1) => Some(buf[0]),
            Ok(_) => None,
            Err(e) => {
                warn!("{}", Error::from(SerialError::ReadFailed(e.code())));
                None
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialAdapter {
    pub fn new() -> Self {
        log::info!("SerialAdapter: simulation backend");
        Self {
            rx: heapless::Deque::new(),
            tx: heapless::Vec::new(),
            dropped_lines: 0,
        }
    }

    /// Queue bytes as if received from the host.  Bytes beyond the buffer
    /// capacity are dropped and reported.
    pub fn inject(&mut self, bytes: &[u8]) -> crate::error::Result<()> {
        for &b in bytes {
            if self.rx.push_back(b).is_err() {
                let err = Error::from(SerialError::RxOverflow);
                warn!("SerialAdapter(sim): {}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Bytes still waiting to be read.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Status lines discarded because the transmit buffer was full.
    pub fn dropped_lines(&self) -> u32 {
        self.dropped_lines
    }

    /// Drain everything written so far, raw.
    pub fn take_tx(&mut self) -> Vec<u8> {
        let out = self.tx.to_vec();
        self.tx.clear();
        out
    }

    /// Drain everything written so far, split into terminated lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        let raw = self.take_tx();
        String::from_utf8_lossy(&raw)
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }

    /// Whole lines only: a line that does not fit is dropped entirely so
    /// the buffer never holds an unterminated fragment.
    fn write_line(&mut self, line: &str) {
        let needed = line.len() + LINE_TERMINATOR.len();
        if self.tx.capacity() - self.tx.len() < needed {
            self.dropped_lines = self.dropped_lines.wrapping_add(1);
            warn!("SerialAdapter(sim): tx full, dropping status line");
            return;
        }
        // Capacity checked above; neither extend can fail.
        let _ = self.tx.extend_from_slice(line.as_bytes());
        let _ = self.tx.extend_from_slice(LINE_TERMINATOR);
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SerialAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl SignalSource for SerialAdapter {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

impl EventSink for SerialAdapter {
    fn emit(&mut self, event: &AppEvent) {
        self.write_line(event.status_line());
    }
}
