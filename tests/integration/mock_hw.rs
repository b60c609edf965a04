//! Mock adapters for integration tests.
//!
//! Records every output write and every emitted event so tests can assert
//! on the full history without touching real GPIO/UART registers.

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use collision_indicator::app::detection::ChannelLevels;
use collision_indicator::app::events::AppEvent;
use collision_indicator::app::ports::{EventSink, OutputPort, SignalSource};
use embedded_hal::digital::{ErrorType, OutputPin};

// ── MockOutputs ───────────────────────────────────────────────

pub struct MockOutputs {
    pub applied: Vec<[bool; 4]>,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn new() -> Self {
        Self {
            applied: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<[bool; 4]> {
        self.applied.last().copied()
    }
}

impl OutputPort for MockOutputs {
    fn apply(&mut self, levels: ChannelLevels) {
        self.applied.push(levels.as_array());
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// Byte source plus status sink, like the real UART adapter.
pub struct MockLink {
    pub rx: VecDeque<u8>,
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            events: Vec::new(),
        }
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        Self {
            rx: bytes.iter().copied().collect(),
            events: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.status_line()).collect()
    }
}

impl SignalSource for MockLink {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

impl EventSink for MockLink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── MockPin ───────────────────────────────────────────────────

/// Output pin whose level stays observable after it is moved into a driver.
#[derive(Clone)]
pub struct MockPin {
    level: Rc<Cell<Option<bool>>>,
    writes: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(None)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// `None` until the first write.
    pub fn level(&self) -> Option<bool> {
        self.level.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }

    fn record(&mut self, high: bool) {
        self.level.set(Some(high));
        self.writes.set(self.writes.get() + 1);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(true);
        Ok(())
    }
}

/// Four mock pins plus shared handles for reading them back.
#[allow(dead_code)]
pub fn mock_pins() -> ([MockPin; 4], [MockPin; 4]) {
    let pins = [MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()];
    let observers = pins.clone();
    (pins, observers)
}

#[allow(dead_code)]
pub fn observed_levels(observers: &[MockPin; 4]) -> [Option<bool>; 4] {
    [
        observers[0].level(),
        observers[1].level(),
        observers[2].level(),
        observers[3].level(),
    ]
}
