// hwmon/src/monitor/exchange.rs

use crate::constants::MAX_HW_MONITOR_BUFFER_SIZE;
use crate::protocol::{HwMonitorCommand, ValidatedResponse, codec};
use crate::transport::Transport;
use crate::{Error, Result};

/// Progress of a single request/response exchange.
///
/// `Idle -> Encoded -> Exchanged -> Validated`, with `Rejected` reachable
/// from any non-terminal state. Terminal states never lead back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Encoded,
    Exchanged,
    Validated,
    Rejected,
}

impl ExchangeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Validated | Self::Rejected)
    }
}

/// One hardware-monitor exchange: encode, send once, validate.
pub struct Exchange<'a> {
    command: &'a HwMonitorCommand,
    expected_word_count: u32,
    capacity: usize,
    state: ExchangeState,
}

impl<'a> Exchange<'a> {
    pub fn new(command: &'a HwMonitorCommand, expected_word_count: u32, capacity: usize) -> Self {
        Self {
            command,
            expected_word_count,
            capacity,
            state: ExchangeState::Idle,
        }
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Drive the exchange to a terminal state. An exchange runs at most
    /// once; running it again fails with `Error::InvalidUsage` and sends
    /// nothing.
    pub fn run(&mut self, transport: &mut dyn Transport) -> Result<ValidatedResponse> {
        if self.state != ExchangeState::Idle {
            return Err(Error::InvalidUsage(format!(
                "exchange for opcode {:#x} already ran ({:?})",
                self.command.opcode, self.state
            )));
        }

        let result = self.step(transport);
        match &result {
            Ok(_) => self.transition(ExchangeState::Validated),
            Err(e) => {
                log::debug!(
                    "hw monitor opcode {:#x} rejected via {}: {}",
                    self.command.opcode,
                    transport.describe(),
                    e
                );
                self.transition(ExchangeState::Rejected);
            }
        }
        result
    }

    fn step(&mut self, transport: &mut dyn Transport) -> Result<ValidatedResponse> {
        let request = codec::encode_command(self.command, self.capacity)?;
        self.transition(ExchangeState::Encoded);
        log::trace!("hw monitor request: {:02x?}", request);

        let raw = transport.exchange(&request)?;
        self.transition(ExchangeState::Exchanged);
        log::trace!("hw monitor reply: {:02x?}", raw);

        codec::validate_response(self.command, self.expected_word_count, &raw)
    }

    fn transition(&mut self, next: ExchangeState) {
        log::trace!(
            "hw monitor opcode {:#x}: {:?} -> {:?}",
            self.command.opcode,
            self.state,
            next
        );
        self.state = next;
    }
}

/// Send `command` over `transport`, check the reply carries exactly
/// `expected_word_count` words after the echoed opcode, and return those
/// payload bytes.
pub fn send_command_and_check(
    transport: &mut dyn Transport,
    command: &HwMonitorCommand,
    expected_word_count: u32,
) -> Result<Vec<u8>> {
    Exchange::new(command, expected_word_count, MAX_HW_MONITOR_BUFFER_SIZE)
        .run(transport)
        .map(ValidatedResponse::into_payload)
}
