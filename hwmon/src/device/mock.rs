// hwmon/src/device/mock.rs

use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::device::traits::{CameraDevice, DepthSensor, DeviceContext, FrameCallback};
use crate::device::types::{Frame, ProductLine, StreamProfile};
use crate::transport::{MockTransport, Transport};
use crate::{Error, Result};

/// Lifecycle call recorded by `MockSensor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorCall {
    Open(Vec<StreamProfile>),
    Start,
    Stop,
    Close,
}

type CallbackSlot = Arc<Mutex<Option<FrameCallback>>>;

/// Pushes frames into whatever callback a `MockSensor` currently has
/// installed. Cloneable so tests can keep one while the sensor is borrowed.
#[derive(Clone)]
pub struct FrameInjector {
    slot: CallbackSlot,
}

impl FrameInjector {
    /// Deliver `frame`. Returns false when the sensor is not streaming.
    pub fn emit(&self, frame: Frame) -> bool {
        match self.slot.lock() {
            Ok(mut guard) => match guard.as_mut() {
                Some(cb) => {
                    cb(frame);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }
}

/// Mock depth sensor. It enforces the open/start/stop/close ordering a real
/// sensor does and records every lifecycle call.
pub struct MockSensor {
    pub profiles: Vec<StreamProfile>,
    pub calls: Vec<SensorCall>,
    /// Testing hooks: make the next call of that kind fail.
    pub fail_open: bool,
    pub fail_start: bool,
    pub fail_stop: bool,
    opened: bool,
    streaming: bool,
    callback: CallbackSlot,
}

impl MockSensor {
    pub fn new(profiles: Vec<StreamProfile>) -> Self {
        Self {
            profiles,
            calls: Vec::new(),
            fail_open: false,
            fail_start: false,
            fail_stop: false,
            opened: false,
            streaming: false,
            callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn injector(&self) -> FrameInjector {
        FrameInjector {
            slot: Arc::clone(&self.callback),
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    fn set_callback(&self, callback: Option<FrameCallback>) {
        if let Ok(mut guard) = self.callback.lock() {
            *guard = callback;
        }
    }
}

impl fmt::Debug for MockSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSensor")
            .field("profiles", &self.profiles)
            .field("calls", &self.calls)
            .field("opened", &self.opened)
            .field("streaming", &self.streaming)
            .finish()
    }
}

// A clone is a fresh handle to the same hardware: same profiles and hooks,
// closed, with an empty call log.
impl Clone for MockSensor {
    fn clone(&self) -> Self {
        let mut fresh = Self::new(self.profiles.clone());
        fresh.fail_open = self.fail_open;
        fresh.fail_start = self.fail_start;
        fresh.fail_stop = self.fail_stop;
        fresh
    }
}

impl DepthSensor for MockSensor {
    fn stream_profiles(&self) -> Result<Vec<StreamProfile>> {
        Ok(self.profiles.clone())
    }

    fn open(&mut self, profiles: &[StreamProfile]) -> Result<()> {
        self.calls.push(SensorCall::Open(profiles.to_vec()));
        if self.fail_open {
            return Err(Error::Device("open failed".into()));
        }
        if self.opened {
            return Err(Error::Device("sensor already open".into()));
        }
        if let Some(p) = profiles.iter().find(|p| !self.profiles.contains(p)) {
            return Err(Error::Device(format!("unsupported profile {}", p)));
        }
        self.opened = true;
        Ok(())
    }

    fn start(&mut self, callback: FrameCallback) -> Result<()> {
        self.calls.push(SensorCall::Start);
        if self.fail_start {
            return Err(Error::Device("start failed".into()));
        }
        if !self.opened || self.streaming {
            return Err(Error::Device("start requires an open, idle sensor".into()));
        }
        self.set_callback(Some(callback));
        self.streaming = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.calls.push(SensorCall::Stop);
        if !self.streaming {
            return Err(Error::Device("sensor is not streaming".into()));
        }
        self.set_callback(None);
        self.streaming = false;
        if self.fail_stop {
            return Err(Error::Device("stop failed".into()));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(SensorCall::Close);
        if !self.opened || self.streaming {
            return Err(Error::Device("close requires an open, stopped sensor".into()));
        }
        self.opened = false;
        Ok(())
    }
}

/// Mock camera with a firmware string, a debug channel and an optional
/// depth sensor.
#[derive(Debug, Clone)]
pub struct MockDevice {
    pub name: String,
    pub product_line: ProductLine,
    pub firmware: String,
    pub transport: MockTransport,
    pub sensor: Option<MockSensor>,
}

impl MockDevice {
    pub fn new(name: &str, product_line: ProductLine, firmware: &str) -> Self {
        Self {
            name: name.to_string(),
            product_line,
            firmware: firmware.to_string(),
            transport: MockTransport::new(),
            sensor: None,
        }
    }

    pub fn with_transport(mut self, transport: MockTransport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_sensor(mut self, sensor: MockSensor) -> Self {
        self.sensor = Some(sensor);
        self
    }
}

impl CameraDevice for MockDevice {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn firmware_version(&self) -> Result<String> {
        Ok(self.firmware.clone())
    }

    fn debug_protocol(&mut self) -> &mut dyn Transport {
        &mut self.transport
    }

    fn depth_sensor(&mut self) -> Option<&mut dyn DepthSensor> {
        self.sensor.as_mut().map(|s| s as &mut dyn DepthSensor)
    }
}

/// Mock discovery context returning clones of the registered devices whose
/// product line matches the filter.
#[derive(Debug, Default)]
pub struct MockContext {
    pub devices: Vec<MockDevice>,
    queries: Cell<usize>,
}

impl MockContext {
    pub fn new(devices: Vec<MockDevice>) -> Self {
        Self {
            devices,
            queries: Cell::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl DeviceContext for MockContext {
    type Device = MockDevice;

    fn query_devices(&self, product_line: ProductLine) -> Result<Vec<MockDevice>> {
        self.queries.set(self.queries.get() + 1);
        Ok(self
            .devices
            .iter()
            .filter(|d| d.product_line.matches(product_line))
            .cloned()
            .collect())
    }
}
