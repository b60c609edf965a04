//! One-shot hardware peripheral initialization.
//!
//! Takes the ESP-IDF peripheral singleton, configures the four indicator
//! outputs and the UART0 driver, and hands them back as a [`Board`].
//! Called once from `main()` before the poll loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio::{AnyIOPin, AnyOutputPin, Output, OutputPin, PinDriver};
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripherals::Peripherals;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartDriver};
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::units::Hertz;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::config::IndicatorConfig;
#[cfg(target_os = "espidf")]
use crate::error::{InitError, Result};
#[cfg(target_os = "espidf")]
use crate::pins;

/// Output pin type for every indicator LED.
#[cfg(target_os = "espidf")]
pub type LedPin = PinDriver<'static, AnyOutputPin, Output>;

/// Configured peripherals, ready to be wrapped by adapters.
#[cfg(target_os = "espidf")]
pub struct Board {
    /// Channel order A..D, matching [`pins::LED_GPIOS`].
    pub leds: [LedPin; 4],
    pub uart: UartDriver<'static>,
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &IndicatorConfig) -> Result<Board> {
    let p = Peripherals::take().map_err(|_| InitError::PeripheralsTaken)?;

    // Pin numbers below must stay in step with `pins::LED_GPIOS`.
    let leds = [
        led_output(p.pins.gpio12.downgrade_output())?,
        led_output(p.pins.gpio13.downgrade_output())?,
        led_output(p.pins.gpio14.downgrade_output())?,
        led_output(p.pins.gpio15.downgrade_output())?,
    ];
    info!("hw_init: LED outputs configured on GPIO {:?}", pins::LED_GPIOS);

    let uart_cfg = uart::config::Config::default()
        .baudrate(Hertz(config.baud_rate))
        .rx_fifo_size(config.uart_rx_buffer);

    let uart = UartDriver::new(
        p.uart0,
        p.pins.gpio1,
        p.pins.gpio3,
        Option::<AnyIOPin>::None, // CTS
        Option::<AnyIOPin>::None, // RTS
        &uart_cfg,
    )
    .map_err(|e| InitError::UartInstallFailed(e.code()))?;
    info!(
        "hw_init: UART0 {} baud (tx=GPIO{}, rx=GPIO{})",
        config.baud_rate,
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO
    );

    Ok(Board { leds, uart })
}

#[cfg(target_os = "espidf")]
fn led_output(pin: AnyOutputPin) -> Result<LedPin> {
    PinDriver::output(pin).map_err(|e| InitError::GpioConfigFailed(e.code()).into())
}
