// hwmon/src/lib.rs

//! hwmon
//!
//! Hardware-monitor command exchange for depth cameras, plus the helpers
//! used to drive a device from tests: discovery, firmware gating, stream
//! profile lookup and scoped streaming.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod firmware;
pub mod helpers;
pub mod monitor;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;

// Re-export the error type at crate root so `crate::Error` and
// `crate::Result` are available everywhere.
pub use crate::error::*;

pub use prelude::*;
