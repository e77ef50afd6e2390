#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use hwmon::device::{Frame, MockSensor, SensorCall};
use hwmon::helpers::{
    StreamingSession, do_while_streaming, find_default_depth_profile, find_default_ir_profile,
    remove_arrived_streams,
};
use hwmon::monitor::send_command_and_check;
use hwmon::test_support::{depth_sensor_profiles, mock_d400_device};
use hwmon::transport::MockTransport;

#[test]
fn command_while_streaming_releases_sensor() -> anyhow::Result<()> {
    common::init_logging();
    let mut sensor = MockSensor::new(depth_sensor_profiles());
    let depth = find_default_depth_profile(&sensor)?;
    let mut channel = MockTransport::with_responses(vec![common::fixtures::sample_reply()]);

    let payload = do_while_streaming(&mut sensor, &[depth.clone()], || {
        send_command_and_check(&mut channel, &common::fixtures::sample_command(), 2)
    })??;

    assert_eq!(payload.len(), 8);
    assert_eq!(
        sensor.calls,
        vec![
            SensorCall::Open(vec![depth]),
            SensorCall::Start,
            SensorCall::Stop,
            SensorCall::Close
        ]
    );
    Ok(())
}

#[test]
fn failing_command_still_releases_sensor() -> anyhow::Result<()> {
    let mut dev = mock_d400_device("5.12.7.100", vec![]);
    let mut sensor = dev.sensor.take().expect("mock device has a sensor");
    let depth = find_default_depth_profile(&sensor)?;

    let res = do_while_streaming(&mut sensor, &[depth], || {
        send_command_and_check(&mut dev.transport, &common::fixtures::sample_command(), 0)
    })?;

    assert!(matches!(res, Err(hwmon::Error::Timeout)));
    assert!(!sensor.is_open());
    assert_eq!(sensor.calls.last(), Some(&SensorCall::Close));
    Ok(())
}

#[test]
fn all_expected_streams_arrive() -> anyhow::Result<()> {
    let mut sensor = MockSensor::new(depth_sensor_profiles());
    let injector = sensor.injector();
    let depth = find_default_depth_profile(&sensor)?;
    let ir = find_default_ir_profile(&sensor)?;

    let pending = Arc::new(Mutex::new(vec![depth.clone(), ir.clone()]));
    let cb_pending = Arc::clone(&pending);
    let session = StreamingSession::start(
        &mut sensor,
        &[depth.clone(), ir.clone()],
        Box::new(move |frame: Frame| {
            if let Ok(mut p) = cb_pending.lock() {
                remove_arrived_streams(&frame, &mut p);
            }
        }),
    )?;

    injector.emit(Frame::single(depth.clone(), 1));
    assert_eq!(*pending.lock().unwrap(), vec![ir.clone()]);
    injector.emit(Frame::Set(vec![Frame::single(depth, 2), Frame::single(ir, 2)]));
    session.finish()?;

    assert!(pending.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn failed_start_leaves_sensor_closed() {
    let mut sensor = MockSensor::new(depth_sensor_profiles());
    sensor.fail_start = true;
    let depth = depth_sensor_profiles().remove(0);

    let err = StreamingSession::start(&mut sensor, &[depth.clone()], Box::new(|_| {})).err();
    assert!(matches!(err, Some(hwmon::Error::Device(_))));
    assert_eq!(
        sensor.calls,
        vec![SensorCall::Open(vec![depth]), SensorCall::Start, SensorCall::Close]
    );
    assert!(!sensor.is_open());
}
