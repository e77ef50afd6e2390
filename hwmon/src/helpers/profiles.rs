// hwmon/src/helpers/profiles.rs

use crate::device::{DepthSensor, SensorMode, StreamProfile, StreamType};
use crate::{Error, Result};

/// First profile in `profiles` matching `pred`.
pub fn find_profile_by<P>(profiles: &[StreamProfile], pred: P) -> Option<&StreamProfile>
where
    P: Fn(&StreamProfile) -> bool,
{
    profiles.iter().find(|p| pred(p))
}

/// Default profile of the given stream type.
pub fn default_profile_of(profiles: &[StreamProfile], stream: StreamType) -> Option<&StreamProfile> {
    find_profile_by(profiles, |p| p.is_default && p.stream_type == stream)
}

/// Video profile of `stream` at the resolution of `mode`.
pub fn profile_for_mode(
    profiles: &[StreamProfile],
    stream: StreamType,
    mode: SensorMode,
) -> Option<&StreamProfile> {
    let wanted = mode.resolution();
    find_profile_by(profiles, |p| {
        p.stream_type == stream && p.resolution() == Some(wanted)
    })
}

/// Confidence profile with the same resolution as `depth`. A depth profile
/// without a resolution has no counterpart.
pub fn confidence_for_depth<'a>(
    profiles: &'a [StreamProfile],
    depth: &StreamProfile,
) -> Option<&'a StreamProfile> {
    let res = depth.resolution()?;
    find_profile_by(profiles, |p| {
        p.stream_type == StreamType::Confidence && p.resolution() == Some(res)
    })
}

fn lookup<S, F>(sensor: &S, what: impl FnOnce() -> String, select: F) -> Result<StreamProfile>
where
    S: DepthSensor + ?Sized,
    F: FnOnce(&[StreamProfile]) -> Option<&StreamProfile>,
{
    let profiles = sensor.stream_profiles()?;
    match select(&profiles) {
        Some(p) => {
            log::debug!("selected stream profile {}", p);
            Ok(p.clone())
        }
        None => Err(Error::ProfileNotFound(what())),
    }
}

pub fn find_default_depth_profile<S>(sensor: &S) -> Result<StreamProfile>
where
    S: DepthSensor + ?Sized,
{
    lookup(
        sensor,
        || "default depth profile".to_string(),
        |ps| default_profile_of(ps, StreamType::Depth),
    )
}

pub fn find_default_ir_profile<S>(sensor: &S) -> Result<StreamProfile>
where
    S: DepthSensor + ?Sized,
{
    lookup(
        sensor,
        || "default infrared profile".to_string(),
        |ps| default_profile_of(ps, StreamType::Infrared),
    )
}

/// Profile of `stream` at the resolution named by `mode`.
pub fn find_profile<S>(sensor: &S, stream: StreamType, mode: SensorMode) -> Result<StreamProfile>
where
    S: DepthSensor + ?Sized,
{
    lookup(
        sensor,
        || format!("{:?} profile at {:?} ({})", stream, mode, mode.resolution()),
        |ps| profile_for_mode(ps, stream, mode),
    )
}

pub fn find_confidence_corresponding_to_depth<S>(
    sensor: &S,
    depth_profile: &StreamProfile,
) -> Result<StreamProfile>
where
    S: DepthSensor + ?Sized,
{
    lookup(
        sensor,
        || format!("confidence profile matching {}", depth_profile),
        |ps| confidence_for_depth(ps, depth_profile),
    )
}
