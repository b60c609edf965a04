//! Fuzz target: `SignalMapper` over the simulated serial link
//!
//! Pushes arbitrary byte streams through `SerialAdapter` into the mapper
//! and asserts that the outputs always hold complementary pairs and that
//! exactly one status line is written per recognized token.
//!
//! cargo fuzz run fuzz_token_stream

#![no_main]

use collision_indicator::adapters::serial::{SerialAdapter, SIM_RX_CAPACITY};
use collision_indicator::app::detection::{Channel, ChannelLevels};
use collision_indicator::app::ports::OutputPort;
use collision_indicator::app::service::SignalMapper;
use libfuzzer_sys::fuzz_target;

struct Levels(Option<ChannelLevels>);

impl OutputPort for Levels {
    fn apply(&mut self, levels: ChannelLevels) {
        assert_eq!(levels.level(Channel::A), levels.level(Channel::B));
        assert_eq!(levels.level(Channel::C), levels.level(Channel::D));
        assert_ne!(levels.level(Channel::A), levels.level(Channel::C));
        self.0 = Some(levels);
    }
}

fuzz_target!(|data: &[u8]| {
    let mut serial = SerialAdapter::new();
    let mut out = Levels(None);
    let mut mapper = SignalMapper::new();
    mapper.start(&mut out, &mut serial);
    let _ = serial.take_tx();

    let mut lines = 0;
    for chunk in data.chunks(SIM_RX_CAPACITY) {
        serial.inject(chunk).expect("chunk fits the rx buffer");
        while mapper.poll_duplex(&mut serial, &mut out) {}
        lines += serial.take_lines().len();
    }

    let recognized = data.iter().filter(|&&b| b == b'0' || b == b'1').count();
    assert_eq!(serial.dropped_lines(), 0);
    assert_eq!(lines, recognized);
    assert_eq!(mapper.accepted() as usize, recognized);
});
