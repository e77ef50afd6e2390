#[path = "../common/mod.rs"]
mod common;

use hwmon::device::CameraDevice;
use hwmon::monitor::{Exchange, ExchangeState, HwMonitorBuilder, send_command_and_check};
use hwmon::protocol::HwMonitorCommand;
use hwmon::test_support::{boxed_mock_with_responses, mock_d400_device, reply_with_words};
use hwmon::transport::MockTransport;
use hwmon::{Error, ErrorCategory};

#[test]
fn monitor_sends_exact_wire_image() -> anyhow::Result<()> {
    common::init_logging();
    let mut hwm = common::monitor_with_replies(vec![common::fixtures::sample_reply()]);

    let resp = hwm.execute_validated(&common::fixtures::sample_command(), 2)?;
    assert_eq!(resp.echoed_opcode(), common::fixtures::SAMPLE_OPCODE);
    assert_eq!(resp.words().collect::<Vec<_>>(), common::fixtures::sample_reply_words());

    let sent = hwm.transport().last_sent().expect("one request sent");
    assert_eq!(hex::encode(sent), common::fixtures::sample_request_hex());
    Ok(())
}

#[test]
fn debug_protocol_round_trip() -> anyhow::Result<()> {
    common::init_logging();
    let mut dev = mock_d400_device("5.12.7.100", vec![reply_with_words(0x0e, &[7, 8, 9])]);

    let payload = send_command_and_check(dev.debug_protocol(), &HwMonitorCommand::new(0x0e), 3)?;
    assert_eq!(payload.len(), 12);
    assert_eq!(&payload[..4], &7u32.to_le_bytes());
    assert_eq!(dev.transport.exchange_count(), 1);
    Ok(())
}

#[test]
fn wrong_size_reported_before_opcode() {
    // Both the size and the echo are wrong; size wins.
    let mut hwm = common::monitor_with_replies(vec![reply_with_words(0x99, &[1, 2, 3])]);
    let err = hwm
        .execute(&common::fixtures::sample_command(), 2)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedResponseSize {
            expected: 12,
            actual: 16
        }
    ));
    assert_eq!(err.category(), ErrorCategory::Protocol);
}

#[test]
fn opcode_mismatch_is_a_hard_failure() {
    let mut hwm = common::monitor_with_replies(vec![reply_with_words(0x11, &[1, 2])]);
    let err = hwm
        .execute(&common::fixtures::sample_command(), 2)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::OpcodeMismatch {
            expected: 0x10,
            actual: 0x11
        }
    ));
    assert!(!err.is_skip());
    assert_eq!(hwm.transport().exchange_count(), 1);
}

#[test]
fn builder_with_boxed_transport() -> anyhow::Result<()> {
    let mut hwm = HwMonitorBuilder::new()
        .with_transport(boxed_mock_with_responses(vec![reply_with_words(0x10, &[])]))
        .max_buffer_size(64)
        .build()?;
    assert_eq!(hwm.config().max_buffer_size, 64);
    assert!(hwm.execute(&HwMonitorCommand::new(0x10), 0)?.is_empty());

    let too_big = HwMonitorCommand::new(0x10).with_payload(vec![0; 64]);
    assert!(matches!(
        hwm.execute(&too_big, 0),
        Err(Error::BufferOverflow {
            capacity: 64,
            required: 84
        })
    ));
    Ok(())
}

#[test]
fn handle_releases_transport() {
    let hwm = common::monitor_with_replies(vec![]);
    let transport: MockTransport = hwm.into_transport();
    assert!(transport.sent.is_empty());
}

#[test]
fn finished_exchange_is_not_rerun() {
    let cmd = common::fixtures::sample_command();
    let mut mock = MockTransport::with_responses(vec![
        common::fixtures::sample_reply(),
        common::fixtures::sample_reply(),
    ]);
    let mut ex = Exchange::new(&cmd, 2, hwmon::constants::MAX_HW_MONITOR_BUFFER_SIZE);
    assert!(ex.run(&mut mock).is_ok());

    let err = ex.run(&mut mock).unwrap_err();
    assert!(matches!(err, Error::InvalidUsage(_)));
    assert_eq!(err.category(), ErrorCategory::Usage);
    assert_eq!(ex.state(), ExchangeState::Validated);
    assert_eq!(mock.exchange_count(), 1);
}

#[test]
fn builder_without_transport_is_a_usage_error() {
    let err = HwMonitorBuilder::<MockTransport>::new().build().err();
    assert!(matches!(err, Some(Error::InvalidUsage(_))));
}
