//! Unified error types for the indicator firmware.
//!
//! The signal mapper itself cannot fail; these cover boot-time bring-up and
//! the hardware adapters, which log and swallow runtime I/O failures.
//! All variants are `Copy` so adapters can pass them to `log` without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(InitError),
    /// A UART read or write failed.
    Serial(SerialError),
    /// A configuration field is out of range.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Init errors
// ---------------------------------------------------------------------------

/// Failures during one-shot peripheral bring-up. Carries the ESP-IDF
/// return code where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    PeripheralsTaken,
    GpioConfigFailed(i32),
    UartInstallFailed(i32),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeripheralsTaken => write!(f, "peripherals already taken"),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={rc})"),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={rc})"),
        }
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    ReadFailed(i32),
    WriteFailed(i32),
    /// The simulated receive buffer is full; extra bytes were dropped.
    RxOverflow,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(rc) => write!(f, "UART read failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "UART write failed (rc={rc})"),
            Self::RxOverflow => write!(f, "receive buffer overflow"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
