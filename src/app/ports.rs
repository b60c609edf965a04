//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   SignalSource ──▶ SignalMapper ──▶ OutputPort
//!                         │
//!                         └─────────▶ EventSink
//! ```
//!
//! Adapters (UART, GPIO bank, test mocks) implement these traits.  The
//! [`SignalMapper`](super::service::SignalMapper) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! All ports are infallible from the domain's point of view: adapters log
//! and swallow I/O failures.

use super::detection::ChannelLevels;
use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Signal source (driven adapter: serial link → domain)
// ───────────────────────────────────────────────────────────────

/// Non-blocking, byte-at-a-time input.
pub trait SignalSource {
    /// Take the next received byte, or `None` if nothing is pending.
    /// Must never block.
    fn read_byte(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → indicator pins)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the four indicator lines.
pub trait OutputPort {
    /// Drive all four channels to `levels` in one call.
    fn apply(&mut self, levels: ChannelLevels);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → status output / logging)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
