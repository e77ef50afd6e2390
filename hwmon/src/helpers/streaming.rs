// hwmon/src/helpers/streaming.rs

use crate::device::{DepthSensor, Frame, FrameCallback, StreamProfile};
use crate::Result;

/// A sensor that is open and streaming. Dropping the session stops and
/// closes the sensor, on error and panic paths too.
pub struct StreamingSession<'a, S: DepthSensor + ?Sized> {
    sensor: &'a mut S,
    streaming: bool,
    open: bool,
}

impl<'a, S: DepthSensor + ?Sized> StreamingSession<'a, S> {
    /// Open `profiles` and start streaming into `callback`. If `start`
    /// fails the sensor is closed again before the error is returned.
    pub fn start(
        sensor: &'a mut S,
        profiles: &[StreamProfile],
        callback: FrameCallback,
    ) -> Result<Self> {
        sensor.open(profiles)?;
        if let Err(e) = sensor.start(callback) {
            if let Err(close_err) = sensor.close() {
                log::warn!("closing sensor after failed start: {}", close_err);
            }
            return Err(e);
        }
        log::trace!("streaming {} profile(s)", profiles.len());
        Ok(Self {
            sensor,
            streaming: true,
            open: true,
        })
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Stop and close now, reporting the first failure.
    pub fn finish(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        let mut first_err = None;
        if self.streaming {
            self.streaming = false;
            if let Err(e) = self.sensor.stop() {
                first_err = Some(e);
            }
        }
        if self.open {
            self.open = false;
            if let Err(e) = self.sensor.close() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<S: DepthSensor + ?Sized> Drop for StreamingSession<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("releasing sensor failed: {}", e);
        }
    }
}

/// Run `action` while `sensor` streams `profiles`, discarding frames.
pub fn do_while_streaming<S, F, R>(sensor: &mut S, profiles: &[StreamProfile], action: F) -> Result<R>
where
    S: DepthSensor + ?Sized,
    F: FnOnce() -> R,
{
    let session = StreamingSession::start(sensor, profiles, Box::new(|_frame: Frame| {}))?;
    let out = action();
    session.finish()?;
    Ok(out)
}

/// Drop every expected profile whose stream type arrived in `frame` (all
/// members of a frameset). Unexpected streams are ignored. Returns how many
/// profiles were removed.
pub fn remove_arrived_streams(frame: &Frame, expected: &mut Vec<StreamProfile>) -> usize {
    let before = expected.len();
    for stream in frame.stream_types() {
        expected.retain(|p| p.stream_type != stream);
    }
    before - expected.len()
}
