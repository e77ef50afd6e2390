// hwmon/src/protocol/mod.rs

pub mod codec;
pub mod command;
pub mod parser;
pub mod response;

pub use codec::{encode_command, encode_command_into, expected_response_len, validate_response};
pub use command::HwMonitorCommand;
pub use response::ValidatedResponse;
