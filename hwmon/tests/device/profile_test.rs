#[path = "../common/mod.rs"]
mod common;

use hwmon::device::{MockSensor, SensorMode, StreamProfile, StreamType};
use hwmon::helpers::{
    confidence_for_depth, find_confidence_corresponding_to_depth, find_default_depth_profile,
    find_default_ir_profile, find_profile,
};
use hwmon::test_support::depth_sensor_profiles;
use hwmon::Error;

#[test]
fn confidence_pairs_with_same_resolution_depth() {
    let depth = common::fixtures::depth_vga();
    let profiles = vec![
        common::fixtures::confidence(1024, 768, 1),
        StreamProfile::video(StreamType::Infrared, 640, 480),
        common::fixtures::confidence(320, 240, 2),
        common::fixtures::confidence(640, 480, 3),
        common::fixtures::confidence(1280, 720, 4),
    ];

    let found = confidence_for_depth(&profiles, &depth).expect("640x480 confidence");
    assert_eq!(found.unique_id, 3);
    assert_eq!(found.stream_type, StreamType::Confidence);
}

#[test]
fn sensor_lookups_on_typical_profiles() -> anyhow::Result<()> {
    let sensor = MockSensor::new(depth_sensor_profiles());

    let depth = find_default_depth_profile(&sensor)?;
    assert_eq!(depth, common::fixtures::depth_vga().with_unique_id(1));

    let ir = find_default_ir_profile(&sensor)?;
    assert_eq!(ir.stream_type, StreamType::Infrared);
    assert_eq!(ir.stream_index, 1);

    let xga = find_profile(&sensor, StreamType::Depth, SensorMode::Xga)?;
    assert_eq!(xga.unique_id, 3);

    let conf = find_confidence_corresponding_to_depth(&sensor, &xga)?;
    assert_eq!(conf.unique_id, 4);
    Ok(())
}

#[test]
fn missing_mode_is_a_hard_failure() {
    let sensor = MockSensor::new(depth_sensor_profiles());
    let err = find_profile(&sensor, StreamType::Infrared, SensorMode::Qvga).unwrap_err();
    assert!(matches!(err, Error::ProfileNotFound(_)));
    assert!(!err.is_skip());
}
