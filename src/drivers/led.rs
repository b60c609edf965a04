//! Single indicator LED driver.
//!
//! Wraps any `embedded_hal` output pin and remembers the last level it
//! commanded.  A failed pin write is logged and the recorded level is left
//! unchanged, so `is_on()` reflects what the hardware last accepted.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `P` is an `esp_idf_hal::gpio::PinDriver` in output mode.
//! On host/test: any mock implementing `OutputPin`.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

pub struct LedDriver<P> {
    pin: P,
    gpio: i32,
    on: bool,
}

impl<P: OutputPin> LedDriver<P> {
    /// Take ownership of `pin` and drive it to `initial`.
    pub fn new(pin: P, gpio: i32, initial: bool) -> Self {
        let mut led = Self {
            pin,
            gpio,
            on: !initial,
        };
        led.set(initial);
        led
    }

    pub fn set(&mut self, on: bool) {
        match self.pin.set_state(PinState::from(on)) {
            Ok(()) => self.on = on,
            Err(e) => warn!("LED GPIO{} write failed: {:?}", self.gpio, e),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
