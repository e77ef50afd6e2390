// hwmon/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These build synthetic device replies and pre-seeded mocks so tests across
//! the crate and the tests/ directory share the same setup.
#![allow(dead_code)]

use crate::device::{MockDevice, MockSensor, ProductLine, StreamProfile, StreamType};
use crate::transport::{self, MockTransport};

/// Synthetic reply: the echoed opcode followed by `words`, all little-endian.
#[doc(hidden)]
pub fn reply_with_words(opcode: u32, words: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 * (words.len() + 1));
    out.extend_from_slice(&opcode.to_le_bytes());
    for w in words {
        out.extend_from_slice(&w.to_le_bytes());
    }
    out
}

/// Synthetic reply: the echoed opcode followed by raw payload bytes.
#[doc(hidden)]
pub fn reply_with_payload(opcode: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = opcode.to_le_bytes().to_vec();
    out.extend_from_slice(payload);
    out
}

/// Build a MockTransport pre-seeded with the given replies and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn transport::Transport> {
    Box::new(MockTransport::with_responses(responses))
}

/// A D400-series mock camera whose debug channel answers with `replies`.
#[doc(hidden)]
pub fn mock_d400_device(firmware: &str, replies: Vec<Vec<u8>>) -> MockDevice {
    MockDevice::new("Mock D400", ProductLine::D400, firmware)
        .with_transport(MockTransport::with_responses(replies))
        .with_sensor(MockSensor::new(depth_sensor_profiles()))
}

/// Stream profiles of a typical depth sensor: default depth and IR at VGA,
/// an XGA depth mode and confidence at both resolutions.
#[doc(hidden)]
pub fn depth_sensor_profiles() -> Vec<StreamProfile> {
    vec![
        StreamProfile::video(StreamType::Depth, 640, 480)
            .with_default(true)
            .with_unique_id(1),
        StreamProfile::video(StreamType::Infrared, 640, 480)
            .with_default(true)
            .with_index(1)
            .with_unique_id(2),
        StreamProfile::video(StreamType::Depth, 1024, 768).with_unique_id(3),
        StreamProfile::video(StreamType::Confidence, 1024, 768).with_unique_id(4),
        StreamProfile::video(StreamType::Confidence, 640, 480).with_unique_id(5),
    ]
}
