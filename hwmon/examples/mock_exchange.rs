//! Run one hardware-monitor exchange against a mock debug channel.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p hwmon --example mock_exchange

use hwmon::prelude::*;
use hwmon::test_support::reply_with_words;
use hwmon::transport::MockTransport;

fn main() -> hwmon::Result<()> {
    env_logger::init();

    let transport = MockTransport::with_responses(vec![reply_with_words(0x10, &[5, 0xcafe_f00d])]);
    let mut hwm = HwMonitorBuilder::new().with_transport(transport).build()?;

    let cmd = HwMonitorCommand::with_params(0x10, 1, 0, 0x1234, -1);
    let resp = hwm.execute_validated(&cmd, 2)?;
    println!("opcode {:#x} echoed", resp.echoed_opcode());
    for (i, w) in resp.words().enumerate() {
        println!("word[{}] = {:#010x}", i, w);
    }

    let sent = hwm.transport().last_sent().unwrap_or(&[]);
    println!("request: {}", hex::encode(sent));
    Ok(())
}
