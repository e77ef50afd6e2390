// hwmon/src/device/mod.rs

//! Interfaces of the device collaborators (discovery, firmware info,
//! sensors) together with in-memory mock implementations.

pub mod mock;
pub mod traits;
pub mod types;

pub use mock::{FrameInjector, MockContext, MockDevice, MockSensor, SensorCall};
pub use traits::{CameraDevice, DepthSensor, DeviceContext, FrameCallback};
pub use types::{Frame, ProductLine, Resolution, SensorMode, StreamProfile, StreamType};
