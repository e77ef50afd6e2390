// helpers.rs: logging setup and pre-seeded mocks

use hwmon::device::{MockContext, MockDevice};
use hwmon::monitor::HwMonitor;
use hwmon::transport::MockTransport;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn monitor_with_replies(replies: Vec<Vec<u8>>) -> HwMonitor<MockTransport> {
    HwMonitor::new(MockTransport::with_responses(replies))
}

pub fn context_with(devices: Vec<MockDevice>) -> MockContext {
    MockContext::new(devices)
}
