//! Collision Indicator Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  SerialAdapter (UART0)        LedBankAdapter (GPIO12-15) │
//! │  SignalSource + EventSink     OutputPort                 │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │        ┌──────────────────────────────────────┐          │
//! │        │     SignalMapper (pure logic)        │          │
//! │        │  '1' → Detected   '0' → Clear        │          │
//! │        └──────────────────────────────────────┘          │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{debug, info, LevelFilter};

use collision_indicator::adapters::hardware::LedBankAdapter;
use collision_indicator::adapters::serial::SerialAdapter;
use collision_indicator::app::service::SignalMapper;
use collision_indicator::config::IndicatorConfig;
use collision_indicator::drivers::hw_init;
use collision_indicator::drivers::watchdog::Watchdog;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    // UART0 carries both the console and the status link; keep per-token
    // chatter off the wire.
    log::set_max_level(LevelFilter::Info);

    info!("Collision indicator v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = IndicatorConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    let board = hw_init::init_peripherals(&config)?;
    let mut leds = LedBankAdapter::new(board.leds);
    let mut serial = SerialAdapter::new(board.uart);
    let watchdog = Watchdog::subscribe(config.watchdog_timeout_ms);
    if !watchdog.is_armed() {
        log::warn!("Watchdog not armed; a stalled loop will not reset the device");
    }

    // ── 4. Mapper ─────────────────────────────────────────────
    // The host expects only status lines after the ready banner; past this
    // point only hardware faults log above `debug`.
    let mut mapper = SignalMapper::new();
    mapper.start(&mut leds, &mut serial);

    debug!("Entering poll loop");

    // ── 5. Poll loop (never returns) ──────────────────────────
    loop {
        mapper.poll_duplex(&mut serial, &mut leds);
        watchdog.feed();
    }
}
