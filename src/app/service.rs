//! Signal mapper — the hexagonal core.
//!
//! [`SignalMapper`] owns the current output levels and applies the fixed
//! token table.  All I/O flows through port traits injected at call sites,
//! making the whole mapper testable with mock adapters.
//!
//! ```text
//!  SignalSource ──▶ ┌──────────────┐ ──▶ EventSink
//!                   │ SignalMapper │
//!                   └──────────────┘ ──▶ OutputPort
//! ```

use log::{debug, trace};

use super::detection::{ChannelLevels, DetectionState};
use super::events::AppEvent;
use super::ports::{EventSink, OutputPort, SignalSource};

pub struct SignalMapper {
    levels: ChannelLevels,
    accepted: u32,
    ignored: u32,
}

impl SignalMapper {
    /// Construct the mapper at its power-on state (Clear).
    ///
    /// Does **not** touch the outputs; call [`start`](Self::start) next.
    pub fn new() -> Self {
        Self {
            levels: ChannelLevels::default(),
            accepted: 0,
            ignored: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the power-on levels and announce readiness.
    pub fn start(&mut self, out: &mut impl OutputPort, sink: &mut impl EventSink) {
        self.levels = ChannelLevels::default();
        out.apply(self.levels);
        sink.emit(&AppEvent::Ready);
        debug!("SignalMapper started in {:?}", self.levels.state());
    }

    // ── Per-byte dispatch ─────────────────────────────────────

    /// Consume at most one pending byte from `src` and handle it.
    ///
    /// Returns `true` if a byte was consumed (recognized or not).
    pub fn poll(
        &mut self,
        src: &mut impl SignalSource,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) -> bool {
        match src.read_byte() {
            Some(byte) => {
                self.handle_token(byte, out, sink);
                true
            }
            None => false,
        }
    }

    /// Poll when the source and the sink are the same adapter (the UART).
    pub fn poll_duplex(
        &mut self,
        link: &mut (impl SignalSource + EventSink),
        out: &mut impl OutputPort,
    ) -> bool {
        match link.read_byte() {
            Some(byte) => {
                self.handle_token(byte, out, link);
                true
            }
            None => false,
        }
    }

    /// Apply one received byte.  Recognized tokens rewrite all four
    /// outputs and emit their status line, even when the state is
    /// unchanged; anything else is discarded without output.
    pub fn handle_token(
        &mut self,
        byte: u8,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) -> Option<DetectionState> {
        let Some(state) = DetectionState::from_token(byte) else {
            self.ignored = self.ignored.wrapping_add(1);
            trace!("ignored byte 0x{:02x}", byte);
            return None;
        };

        self.levels = ChannelLevels::for_state(state);
        out.apply(self.levels);
        sink.emit(&AppEvent::Signal(state));
        self.accepted = self.accepted.wrapping_add(1);
        debug!("token {:?} -> {:?}", byte as char, state);
        Some(state)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> DetectionState {
        self.levels.state()
    }

    pub fn levels(&self) -> ChannelLevels {
        self.levels
    }

    /// Recognized tokens handled since construction (wrapping).
    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Discarded bytes since construction (wrapping).
    pub fn ignored(&self) -> u32 {
        self.ignored
    }
}

impl Default for SignalMapper {
    fn default() -> Self {
        Self::new()
    }
}
