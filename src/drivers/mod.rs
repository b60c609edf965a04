//! Output drivers, hardware initialisation, and supervision.

pub mod hw_init;
pub mod led;
pub mod watchdog;
