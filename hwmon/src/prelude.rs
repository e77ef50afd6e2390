// hwmon/src/prelude.rs

pub use crate::device::{
    CameraDevice, DepthSensor, DeviceContext, Frame, ProductLine, Resolution, SensorMode,
    StreamProfile, StreamType,
};
pub use crate::firmware::FirmwareVersion;
pub use crate::monitor::{HwMonitor, HwMonitorBuilder, HwMonitorConfig, send_command_and_check};
pub use crate::protocol::{HwMonitorCommand, ValidatedResponse};
pub use crate::transport::Transport;
pub use crate::{Error, ErrorCategory, Result};
