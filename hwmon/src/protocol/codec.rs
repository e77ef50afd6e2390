// hwmon/src/protocol/codec.rs

use crate::constants::{HEADER_SIZE, OPCODE_ECHO_SIZE, WORD_SIZE};
use crate::{Error, Result};

use super::command::HwMonitorCommand;
use super::parser;
use super::response::ValidatedResponse;

/// Encode a command into a request buffer of at most `capacity` bytes.
///
/// Layout: `opcode, p1, p2, p3, p4` as little-endian 32-bit words, then the
/// payload verbatim.
pub fn encode_command(cmd: &HwMonitorCommand, capacity: usize) -> Result<Vec<u8>> {
    let required = check_capacity(cmd, capacity)?;
    let mut out = Vec::with_capacity(required);
    out.extend_from_slice(&cmd.opcode.to_le_bytes());
    for p in cmd.params {
        out.extend_from_slice(&p.to_le_bytes());
    }
    out.extend_from_slice(&cmd.payload);
    Ok(out)
}

/// Encode a command into the front of `buf` and return the number of bytes
/// written. The capacity is `buf.len()`; bytes past the encoded length are
/// left untouched.
pub fn encode_command_into(cmd: &HwMonitorCommand, buf: &mut [u8]) -> Result<usize> {
    let required = check_capacity(cmd, buf.len())?;
    buf[..WORD_SIZE].copy_from_slice(&cmd.opcode.to_le_bytes());
    for (i, p) in cmd.params.iter().enumerate() {
        let start = WORD_SIZE * (i + 1);
        buf[start..start + WORD_SIZE].copy_from_slice(&p.to_le_bytes());
    }
    buf[HEADER_SIZE..required].copy_from_slice(&cmd.payload);
    Ok(required)
}

fn check_capacity(cmd: &HwMonitorCommand, capacity: usize) -> Result<usize> {
    let required = cmd.encoded_len();
    if required > capacity {
        return Err(Error::BufferOverflow { capacity, required });
    }
    Ok(required)
}

/// Exact reply length in bytes for `expected_word_count` payload words plus
/// the opcode echo. Saturates instead of overflowing on narrow targets.
pub fn expected_response_len(expected_word_count: u32) -> usize {
    let bytes = (u64::from(expected_word_count) + 1) * WORD_SIZE as u64;
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

/// Validate a raw reply against the command that produced it and strip the
/// opcode echo.
///
/// The size is checked before the opcode: a short buffer cannot be read as
/// a word.
pub fn validate_response(
    sent: &HwMonitorCommand,
    expected_word_count: u32,
    response: &[u8],
) -> Result<ValidatedResponse> {
    let expected = expected_response_len(expected_word_count);
    if response.len() != expected {
        return Err(Error::UnexpectedResponseSize {
            expected,
            actual: response.len(),
        });
    }

    let echoed = parser::le_u32_at(response, 0)?;
    if echoed != sent.opcode {
        return Err(Error::OpcodeMismatch {
            expected: sent.opcode,
            actual: echoed,
        });
    }

    Ok(ValidatedResponse::new(
        echoed,
        response[OPCODE_ECHO_SIZE..].to_vec(),
    ))
}
