// hwmon/src/monitor/handle.rs

use crate::monitor::builder::HwMonitorConfig;
use crate::monitor::exchange::Exchange;
use crate::protocol::{HwMonitorCommand, ValidatedResponse};
use crate::transport::Transport;
use crate::Result;

/// Hardware-monitor handle owning one debug channel.
///
/// Methods take `&mut self`, so a handle never has two requests in flight.
/// Sharing one channel between handles or threads needs outside locking.
pub struct HwMonitor<T: Transport = Box<dyn Transport>> {
    transport: T,
    config: HwMonitorConfig,
}

impl<T: Transport> HwMonitor<T> {
    /// Handle with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, HwMonitorConfig::default())
    }

    pub fn with_config(transport: T, config: HwMonitorConfig) -> Self {
        Self { transport, config }
    }

    /// Execute a command and return the reply payload with the opcode echo
    /// stripped.
    pub fn execute(&mut self, cmd: &HwMonitorCommand, expected_word_count: u32) -> Result<Vec<u8>> {
        self.execute_validated(cmd, expected_word_count)
            .map(ValidatedResponse::into_payload)
    }

    /// Execute a command and keep the full validated reply.
    pub fn execute_validated(
        &mut self,
        cmd: &HwMonitorCommand,
        expected_word_count: u32,
    ) -> Result<ValidatedResponse> {
        log::debug!(
            "hw monitor opcode {:#x} params {:?} payload {} bytes, expecting {} words",
            cmd.opcode,
            cmd.params,
            cmd.payload.len(),
            expected_word_count
        );
        Exchange::new(cmd, expected_word_count, self.config.max_buffer_size)
            .run(&mut self.transport)
    }

    pub fn config(&self) -> &HwMonitorConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
