//! Integration tests for the SignalMapper → ports pipeline.
//!
//! Drives the mapper with mock adapters and checks output levels and the
//! exact status text for each scenario.

use super::mock_hw::{MockLink, MockOutputs};

use collision_indicator::app::detection::DetectionState;
use collision_indicator::app::events::{AppEvent, CLEAR_STATUS, DETECTED_STATUS, READY_STATUS};
use collision_indicator::app::service::SignalMapper;

const CLEAR: [bool; 4] = [true, true, false, false];
const DETECTED: [bool; 4] = [false, false, true, true];

fn started() -> (SignalMapper, MockOutputs, MockLink) {
    let mut mapper = SignalMapper::new();
    let mut out = MockOutputs::new();
    let mut link = MockLink::new();
    mapper.start(&mut out, &mut link);
    (mapper, out, link)
}

#[test]
fn start_drives_clear_and_announces_ready() {
    let (mapper, out, link) = started();

    assert_eq!(out.applied, vec![CLEAR]);
    assert_eq!(link.lines(), vec![READY_STATUS]);
    assert_eq!(mapper.state(), DetectionState::Clear);
}

#[test]
fn one_detects() {
    let (mut mapper, mut out, mut link) = started();

    mapper.handle_token(b'1', &mut out, &mut link);

    assert_eq!(out.current(), Some(DETECTED));
    assert_eq!(link.lines().last(), Some(&DETECTED_STATUS));
    assert_eq!(mapper.state(), DetectionState::Detected);
}

#[test]
fn zero_after_one_clears() {
    let (mut mapper, mut out, mut link) = started();

    mapper.handle_token(b'1', &mut out, &mut link);
    mapper.handle_token(b'0', &mut out, &mut link);

    assert_eq!(out.current(), Some(CLEAR));
    assert_eq!(
        link.lines(),
        vec![READY_STATUS, DETECTED_STATUS, CLEAR_STATUS]
    );
}

#[test]
fn unrecognized_byte_is_silent() {
    let (mut mapper, mut out, mut link) = started();
    mapper.handle_token(b'1', &mut out, &mut link);
    let writes_before = out.applied.len();
    let events_before = link.events.len();

    mapper.handle_token(b'x', &mut out, &mut link);

    assert_eq!(out.applied.len(), writes_before, "no output write");
    assert_eq!(link.events.len(), events_before, "no status line");
    assert_eq!(mapper.state(), DetectionState::Detected);
}

#[test]
fn repeated_token_rewrites_and_reports_each_time() {
    let (mut mapper, mut out, mut link) = started();

    mapper.handle_token(b'1', &mut out, &mut link);
    mapper.handle_token(b'1', &mut out, &mut link);

    assert_eq!(out.applied, vec![CLEAR, DETECTED, DETECTED]);
    assert_eq!(
        link.events,
        vec![
            AppEvent::Ready,
            AppEvent::Signal(DetectionState::Detected),
            AppEvent::Signal(DetectionState::Detected),
        ]
    );
}

#[test]
fn poll_consumes_one_byte_per_call() {
    let mut mapper = SignalMapper::new();
    let mut out = MockOutputs::new();
    let mut link = MockLink::with_input(b"1\n0");

    assert!(mapper.poll_duplex(&mut link, &mut out));
    assert_eq!(link.rx.len(), 2);
    assert_eq!(mapper.state(), DetectionState::Detected);

    assert!(mapper.poll_duplex(&mut link, &mut out));
    assert_eq!(link.rx.len(), 1);
    assert_eq!(mapper.ignored(), 1);

    assert!(mapper.poll_duplex(&mut link, &mut out));
    assert_eq!(mapper.state(), DetectionState::Clear);

    assert!(!mapper.poll_duplex(&mut link, &mut out), "empty source");
    assert_eq!(out.applied.len(), 2);
}

#[test]
fn poll_with_separate_source_and_sink() {
    let mut mapper = SignalMapper::new();
    let mut out = MockOutputs::new();
    let mut src = MockLink::with_input(b"1");
    let mut sink = MockLink::new();

    assert!(mapper.poll(&mut src, &mut out, &mut sink));
    assert!(src.events.is_empty());
    assert_eq!(sink.lines(), vec![DETECTED_STATUS]);
}

#[test]
fn host_stream_of_frames() {
    // The detector writes one token per camera frame, no separators.
    let (mut mapper, mut out, mut link) = started();
    link.rx.extend(b"000111100".iter().copied());

    while mapper.poll_duplex(&mut link, &mut out) {}

    assert_eq!(mapper.accepted(), 9);
    assert_eq!(mapper.ignored(), 0);
    assert_eq!(out.current(), Some(CLEAR));
    assert_eq!(link.events.len(), 10);
}
