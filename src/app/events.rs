//! Outbound application events.
//!
//! The [`SignalMapper`](super::service::SignalMapper) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Each event carries fixed
//! status text; adapters decide the framing (the UART adapter appends
//! `"\r\n"`).

use super::detection::DetectionState;

pub const READY_STATUS: &str = "System Ready - Monitoring for detection signals...";
pub const DETECTED_STATUS: &str = "DETECTED: LEDs 3-4 ON, LEDs 1-2 OFF";
pub const CLEAR_STATUS: &str = "CLEAR: LEDs 1-2 ON, LEDs 3-4 OFF";

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs are at their power-on levels and the link is being polled.
    Ready,

    /// A recognized token was applied to the outputs.
    Signal(DetectionState),
}

impl AppEvent {
    /// Human-readable status line, without line terminator.
    pub const fn status_line(self) -> &'static str {
        match self {
            Self::Ready => READY_STATUS,
            Self::Signal(DetectionState::Detected) => DETECTED_STATUS,
            Self::Signal(DetectionState::Clear) => CLEAR_STATUS,
        }
    }
}
