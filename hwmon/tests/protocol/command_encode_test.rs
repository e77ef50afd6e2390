#[path = "../common/mod.rs"]
mod common;

use hwmon::constants::{HEADER_SIZE, MAX_HW_MONITOR_BUFFER_SIZE};
use hwmon::protocol::{HwMonitorCommand, encode_command, encode_command_into};
use hwmon::Error;

#[test]
fn sample_command_matches_wire_fixture() -> anyhow::Result<()> {
    let cmd = common::fixtures::sample_command();
    let expected = hex::decode(common::fixtures::sample_request_hex())?;
    assert_eq!(cmd.encode()?, expected);
    Ok(())
}

#[test]
fn payload_follows_header_verbatim() -> anyhow::Result<()> {
    let payload = hex::decode("00ff10ab7f")?;
    let cmd = common::fixtures::sample_command().with_payload(payload.clone());
    let bytes = cmd.encode()?;
    assert_eq!(bytes.len(), HEADER_SIZE + payload.len());
    assert_eq!(&bytes[..HEADER_SIZE], &hex::decode(common::fixtures::sample_request_hex())?[..]);
    assert_eq!(&bytes[HEADER_SIZE..], &payload[..]);
    Ok(())
}

#[test]
fn exactly_full_buffer_is_accepted() {
    let cmd = HwMonitorCommand::new(0x01).with_payload(vec![0u8; MAX_HW_MONITOR_BUFFER_SIZE - HEADER_SIZE]);
    let mut buf = vec![0u8; MAX_HW_MONITOR_BUFFER_SIZE];
    assert_eq!(encode_command_into(&cmd, &mut buf).unwrap(), MAX_HW_MONITOR_BUFFER_SIZE);
}

#[test]
fn one_byte_over_is_buffer_overflow() {
    let cmd = HwMonitorCommand::new(0x01)
        .with_payload(vec![0u8; MAX_HW_MONITOR_BUFFER_SIZE - HEADER_SIZE + 1]);
    match encode_command(&cmd, MAX_HW_MONITOR_BUFFER_SIZE) {
        Err(Error::BufferOverflow { capacity, required }) => {
            assert_eq!(capacity, MAX_HW_MONITOR_BUFFER_SIZE);
            assert_eq!(required, MAX_HW_MONITOR_BUFFER_SIZE + 1);
        }
        other => panic!("expected BufferOverflow, got {:?}", other),
    }
}
