// hwmon/src/error.rs

use thiserror::Error;

use crate::device::ProductLine;
use crate::firmware::FirmwareVersion;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The encoded request would not fit in the buffer.
    #[error("hw monitor buffer overflow: {required} bytes required, capacity is {capacity}")]
    BufferOverflow { capacity: usize, required: usize },

    /// The reply length differs from `4 * (expected words + 1)`.
    #[error("unexpected response size: expected {expected} bytes, got {actual}")]
    UnexpectedResponseSize { expected: usize, actual: usize },

    /// The reply echoed a different opcode than the one sent.
    #[error("opcode mismatch: expected {expected:#010x}, got {actual:#010x}")]
    OpcodeMismatch { expected: u32, actual: u32 },

    /// Discovery found no device of the requested family.
    #[error("no device of product line {product_line} was found")]
    NoMatchingDevice { product_line: ProductLine },

    /// The device firmware predates the required version.
    #[error("firmware version {actual} is under the minimum required version {minimum}")]
    FirmwareTooOld {
        actual: FirmwareVersion,
        minimum: FirmwareVersion,
    },

    /// No stream profile satisfied a lookup.
    #[error("stream profile not found: {0}")]
    ProfileNotFound(String),

    /// A firmware version string could not be parsed.
    #[error("invalid firmware version: {0:?}")]
    InvalidFirmwareVersion(String),

    /// A bounds-checked read ran past the end of a buffer.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The API was driven in a way it does not support, such as running a
    /// finished exchange again.
    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    /// The debug channel failed to carry the exchange.
    #[error("transport error: {0}")]
    Transport(String),

    /// The debug channel gave no reply.
    #[error("operation timed out")]
    Timeout,

    /// A device or sensor call failed.
    #[error("device error: {0}")]
    Device(String),
}

/// Coarse classification used by callers to choose between skipping a run
/// and failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Framing or correlation failure in the command exchange.
    Protocol,
    /// The environment cannot run this check (no device, old firmware).
    Precondition,
    /// The device lacks something the caller expected it to have.
    Capability,
    /// A transport, sensor or device collaborator failed.
    Collaborator,
    /// The caller misused the API.
    Usage,
}

impl Error {
    /// Return the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BufferOverflow { .. }
            | Self::UnexpectedResponseSize { .. }
            | Self::OpcodeMismatch { .. }
            | Self::InvalidLength { .. } => ErrorCategory::Protocol,
            Self::NoMatchingDevice { .. } | Self::FirmwareTooOld { .. } => {
                ErrorCategory::Precondition
            }
            Self::ProfileNotFound(_) | Self::InvalidFirmwareVersion(_) => {
                ErrorCategory::Capability
            }
            Self::InvalidUsage(_) => ErrorCategory::Usage,
            Self::Transport(_) | Self::Timeout | Self::Device(_) => ErrorCategory::Collaborator,
        }
    }

    /// True when the error means "skip this run" rather than "fail it".
    pub fn is_skip(&self) -> bool {
        self.category() == ErrorCategory::Precondition
    }
}

pub type Result<T> = std::result::Result<T, Error>;
