//! Hardware adapter — bridges the indicator LEDs to [`OutputPort`].
//!
//! Owns one [`LedDriver`] per channel.  Generic over the pin type so the
//! same adapter runs against `PinDriver`s on the device and mock pins on
//! the host.

use embedded_hal::digital::OutputPin;

use crate::app::detection::{Channel, ChannelLevels};
use crate::app::ports::OutputPort;
use crate::drivers::led::LedDriver;
use crate::pins;

/// Concrete adapter for the four indicator lines, channel order A..D.
pub struct LedBankAdapter<P> {
    leds: [LedDriver<P>; 4],
}

impl<P: OutputPin> LedBankAdapter<P> {
    /// Wrap four output pins (A..D) and drive them to the power-on levels.
    pub fn new(outputs: [P; 4]) -> Self {
        let initial = ChannelLevels::default().as_array();
        let mut ch = 0;
        let leds = outputs.map(|pin| {
            let led = LedDriver::new(pin, pins::LED_GPIOS[ch], initial[ch]);
            ch += 1;
            led
        });
        Self { leds }
    }

    /// Last level each line accepted, channel order A..D.
    pub fn current_levels(&self) -> [bool; 4] {
        [
            self.leds[0].is_on(),
            self.leds[1].is_on(),
            self.leds[2].is_on(),
            self.leds[3].is_on(),
        ]
    }

    pub fn is_on(&self, channel: Channel) -> bool {
        self.leds[channel.index()].is_on()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<P: OutputPin> OutputPort for LedBankAdapter<P> {
    fn apply(&mut self, levels: ChannelLevels) {
        for ch in Channel::ALL {
            self.leds[ch.index()].set(levels.level(ch));
        }
    }
}
