// hwmon/src/protocol/command.rs

use crate::constants::{HEADER_SIZE, MAX_HW_MONITOR_BUFFER_SIZE, PARAM_COUNT};
use crate::Result;

use super::codec;

/// A hardware-monitor management command: opcode, four scalar parameters
/// and an optional raw payload.
///
/// All four parameters are always encoded, whether or not the opcode uses
/// them. Unused ones stay zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HwMonitorCommand {
    /// Operation id, echoed back in the reply.
    pub opcode: u32,
    /// `p1..p4` in wire order.
    pub params: [i32; PARAM_COUNT],
    /// Raw bytes sent after the header.
    pub payload: Vec<u8>,
}

impl HwMonitorCommand {
    /// Command with all parameters zero and no payload.
    pub fn new(opcode: u32) -> Self {
        Self {
            opcode,
            params: [0; PARAM_COUNT],
            payload: Vec::new(),
        }
    }

    /// Positional constructor matching the `opcode, p1, p2, p3, p4` layout.
    pub fn with_params(opcode: u32, p1: i32, p2: i32, p3: i32, p4: i32) -> Self {
        Self {
            opcode,
            params: [p1, p2, p3, p4],
            payload: Vec::new(),
        }
    }

    /// Set `p1`.
    pub fn p1(mut self, value: i32) -> Self {
        self.params[0] = value;
        self
    }

    /// Set `p2`.
    pub fn p2(mut self, value: i32) -> Self {
        self.params[1] = value;
        self
    }

    /// Set `p3`.
    pub fn p3(mut self, value: i32) -> Self {
        self.params[2] = value;
        self
    }

    /// Set `p4`.
    pub fn p4(mut self, value: i32) -> Self {
        self.params[3] = value;
        self
    }

    /// Attach a payload appended verbatim after the header.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Number of bytes this command occupies once encoded.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }

    /// Encode against the default 1024-byte buffer capacity.
    pub fn encode(&self) -> Result<Vec<u8>> {
        codec::encode_command(self, MAX_HW_MONITOR_BUFFER_SIZE)
    }
}
