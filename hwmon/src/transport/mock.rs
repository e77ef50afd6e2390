// hwmon/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent requests and returns
/// queued replies in order.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    /// Testing hook: number of upcoming exchanges that fail with Timeout.
    /// The request is still recorded in `sent`.
    pub failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock with replies already queued.
    pub fn with_responses(responses: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Set how many subsequent exchanges should fail.
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn last_sent(&self) -> Option<&[u8]> {
        self.sent.last().map(Vec::as_slice)
    }

    pub fn exchange_count(&self) -> usize {
        self.sent.len()
    }
}

impl Transport for MockTransport {
    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(request.to_vec());
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Timeout);
        }
        // Nothing queued behaves like a device that never answers.
        self.responses.pop_front().ok_or(Error::Timeout)
    }

    fn describe(&self) -> String {
        "mock transport".to_string()
    }
}
