// hwmon/src/protocol/response.rs

use crate::constants::WORD_SIZE;
use crate::protocol::parser;
use crate::Result;

/// A reply that passed size and opcode validation, with the opcode echo
/// stripped. The payload is always a whole number of 32-bit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponse {
    echoed_opcode: u32,
    payload: Vec<u8>,
}

impl ValidatedResponse {
    /// Only the validator builds these; it guarantees word alignment.
    pub(crate) fn new(echoed_opcode: u32, payload: Vec<u8>) -> Self {
        debug_assert_eq!(payload.len() % WORD_SIZE, 0);
        Self {
            echoed_opcode,
            payload,
        }
    }

    pub fn echoed_opcode(&self) -> u32 {
        self.echoed_opcode
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Number of payload words.
    pub fn len_words(&self) -> usize {
        self.payload.len() / WORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Payload word at `index` (word index, not byte offset).
    pub fn word(&self, index: usize) -> Result<u32> {
        let offset = index.saturating_mul(WORD_SIZE);
        parser::le_u32_at(&self.payload, offset)
    }

    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        parser::le_words(&self.payload)
    }
}
