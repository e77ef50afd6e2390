// hwmon/src/monitor/builder.rs

use crate::constants::{HEADER_SIZE, MAX_HW_MONITOR_BUFFER_SIZE};
use crate::monitor::handle::HwMonitor;
use crate::transport::Transport;
use crate::{Error, Result};

/// Per-handle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HwMonitorConfig {
    /// Upper bound on an encoded request, header included.
    pub max_buffer_size: usize,
}

impl Default for HwMonitorConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: MAX_HW_MONITOR_BUFFER_SIZE,
        }
    }
}

/// Helper to construct a HwMonitor with optional configuration.
pub struct HwMonitorBuilder<T> {
    transport: Option<T>,
    config: HwMonitorConfig,
}

impl<T: Transport> HwMonitorBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: HwMonitorConfig::default(),
        }
    }

    /// Provide the debug channel (e.g. MockTransport).
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn max_buffer_size(mut self, size: usize) -> Self {
        self.config.max_buffer_size = size;
        self
    }

    pub fn config(mut self, config: HwMonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Fails without a transport, or when the buffer
    /// cannot hold even a bare header.
    pub fn build(self) -> Result<HwMonitor<T>> {
        if self.config.max_buffer_size < HEADER_SIZE {
            return Err(Error::BufferOverflow {
                capacity: self.config.max_buffer_size,
                required: HEADER_SIZE,
            });
        }
        match self.transport {
            Some(t) => Ok(HwMonitor::with_config(t, self.config)),
            None => Err(Error::InvalidUsage("no transport configured".into())),
        }
    }
}

impl<T: Transport> Default for HwMonitorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
