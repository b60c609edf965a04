//! GPIO / peripheral pin assignments for the indicator board.
//!
//! Single source of truth; every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Indicator LEDs (active HIGH, series resistor to GND)
// ---------------------------------------------------------------------------

/// Channel A: "clear" pair, first LED.
pub const LED1_GPIO: i32 = 12;
/// Channel B: "clear" pair, second LED.
pub const LED2_GPIO: i32 = 13;
/// Channel C: "detected" pair, first LED.
pub const LED3_GPIO: i32 = 14;
/// Channel D: "detected" pair, second LED.
pub const LED4_GPIO: i32 = 15;

/// All indicator outputs in channel order A..D.
pub const LED_GPIOS: [i32; 4] = [LED1_GPIO, LED2_GPIO, LED3_GPIO, LED4_GPIO];

// ---------------------------------------------------------------------------
// UART0 (USB-serial bridge to the detection host)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 1;
pub const UART_RX_GPIO: i32 = 3;
