// hwmon/src/constants.rs
//! Protocol constants shared by the encoder and the validator.

/// Size of one protocol word in bytes. Every header field is one
/// little-endian 32-bit word.
pub const WORD_SIZE: usize = 4;

/// Number of scalar parameters carried by every command.
pub const PARAM_COUNT: usize = 4;

/// Header words: opcode followed by p1..p4.
pub const HEADER_WORDS: usize = 1 + PARAM_COUNT;

/// Encoded header length in bytes (20).
pub const HEADER_SIZE: usize = HEADER_WORDS * WORD_SIZE;

/// Length of the echoed opcode at the start of every reply.
pub const OPCODE_ECHO_SIZE: usize = WORD_SIZE;

/// Default upper bound on an encoded request.
pub const MAX_HW_MONITOR_BUFFER_SIZE: usize = 1024;

/// Largest payload that fits next to the header in the default buffer.
pub const MAX_PAYLOAD_SIZE: usize = MAX_HW_MONITOR_BUFFER_SIZE - HEADER_SIZE;
