// hwmon/src/monitor/mod.rs

//! Hardware-monitor command execution over a debug channel.

pub mod builder;
pub mod exchange;
pub mod handle;

pub use builder::{HwMonitorBuilder, HwMonitorConfig};
pub use exchange::{Exchange, ExchangeState, send_command_and_check};
pub use handle::HwMonitor;
