//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to            |
//! |------------|---------------------|------------------------|
//! | `hardware` | OutputPort          | Four indicator GPIOs   |
//! | `serial`   | SignalSource        | UART0 RX               |
//! |            | EventSink           | UART0 TX (status text) |

pub mod hardware;
pub mod serial;
