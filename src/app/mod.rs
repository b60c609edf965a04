//! Application core — pure domain logic, zero I/O.
//!
//! Token classification, the fixed output table, and the mapper that ties
//! them together.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod detection;
pub mod events;
pub mod ports;
pub mod service;
