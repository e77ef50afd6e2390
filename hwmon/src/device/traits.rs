// hwmon/src/device/traits.rs

use crate::device::types::{Frame, ProductLine, StreamProfile};
use crate::transport::Transport;
use crate::Result;

/// Per-frame callback installed by `DepthSensor::start`.
pub type FrameCallback = Box<dyn FnMut(Frame) + Send>;

/// Entry point for device discovery.
pub trait DeviceContext {
    type Device: CameraDevice;

    /// List connected devices of the given product line. An empty list is a
    /// normal answer, not an error.
    fn query_devices(&self, product_line: ProductLine) -> Result<Vec<Self::Device>>;
}

/// A connected camera.
pub trait CameraDevice {
    fn name(&self) -> String;

    /// Raw firmware version string as reported by the device info.
    fn firmware_version(&self) -> Result<String>;

    /// Raw command channel used for hardware-monitor exchanges.
    fn debug_protocol(&mut self) -> &mut dyn Transport;

    /// The depth sensor, when the device has one.
    fn depth_sensor(&mut self) -> Option<&mut dyn DepthSensor> {
        None
    }
}

/// A sensor that exposes stream profiles and streams frames.
///
/// `open`/`start` acquire the sensor; `stop`/`close` must follow on every
/// exit path. `helpers::StreamingSession` enforces that.
pub trait DepthSensor {
    fn stream_profiles(&self) -> Result<Vec<StreamProfile>>;

    fn open(&mut self, profiles: &[StreamProfile]) -> Result<()>;

    fn start(&mut self, callback: FrameCallback) -> Result<()>;

    fn stop(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}
