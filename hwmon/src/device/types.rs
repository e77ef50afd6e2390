// hwmon/src/device/types.rs

use std::fmt;

use derive_more::{From, Into};

/// Device family filter used during discovery. Values are bit masks; a
/// device matches a filter when the masks intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductLine(u32);

impl ProductLine {
    /// Devices not made by Intel.
    pub const NON_INTEL: Self = Self(0x01);
    /// D400 series stereo cameras.
    pub const D400: Self = Self(0x02);
    /// SR300 coded-light cameras.
    pub const SR300: Self = Self(0x04);
    /// L500 series lidar cameras.
    pub const L500: Self = Self(0x08);
    /// T200 series tracking cameras.
    pub const T200: Self = Self(0x10);
    /// Every depth-producing family: D400, SR300 and L500.
    pub const DEPTH: Self = Self(0x02 | 0x04 | 0x08);
    /// Every Intel family.
    pub const ANY_INTEL: Self = Self(0xfe);
    /// Any device at all.
    pub const ANY: Self = Self(0xff);

    /// Filter from a raw family mask.
    pub const fn new(mask: u32) -> Self {
        Self(mask)
    }

    /// Raw family mask.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// True when the two filters share at least one family bit.
    pub fn matches(&self, other: ProductLine) -> bool {
        self.0 & other.0 != 0
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NON_INTEL => "NON_INTEL",
            Self::SR300 => "SR300",
            Self::D400 => "D400",
            Self::L500 => "L500",
            Self::T200 => "T200",
            Self::DEPTH => "DEPTH",
            Self::ANY_INTEL => "ANY_INTEL",
            Self::ANY => "ANY",
            _ => return write!(f, "{:#04x}", self.0),
        };
        f.write_str(name)
    }
}

/// Kind of data a stream carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamType {
    Any,
    Depth,
    Color,
    Infrared,
    Fisheye,
    Gyro,
    Accel,
    Gpio,
    Pose,
    Confidence,
}

/// Frame size of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Named resolution presets of the depth sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorMode {
    Vga,
    Xga,
    Qvga,
}

impl SensorMode {
    pub fn resolution(self) -> Resolution {
        match self {
            Self::Vga => Resolution::new(640, 480),
            Self::Xga => Resolution::new(1024, 768),
            Self::Qvga => Resolution::new(320, 240),
        }
    }
}

/// One stream a sensor can produce. `video` is `None` for motion and other
/// non-image streams.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamProfile {
    pub stream_type: StreamType,
    pub stream_index: u32,
    pub unique_id: u32,
    pub fps: u32,
    pub is_default: bool,
    pub video: Option<Resolution>,
}

impl StreamProfile {
    pub fn video(stream_type: StreamType, width: u32, height: u32) -> Self {
        Self {
            stream_type,
            stream_index: 0,
            unique_id: 0,
            fps: 30,
            is_default: false,
            video: Some(Resolution::new(width, height)),
        }
    }

    pub fn motion(stream_type: StreamType) -> Self {
        Self {
            stream_type,
            stream_index: 0,
            unique_id: 0,
            fps: 200,
            is_default: false,
            video: None,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_unique_id(mut self, unique_id: u32) -> Self {
        self.unique_id = unique_id;
        self
    }

    pub fn with_index(mut self, stream_index: u32) -> Self {
        self.stream_index = stream_index;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.video
    }

    pub fn width(&self) -> Option<u32> {
        self.video.map(|r| r.width)
    }

    pub fn height(&self) -> Option<u32> {
        self.video.map(|r| r.height)
    }
}

impl fmt::Display for StreamProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.stream_type, self.stream_index)?;
        if let Some(res) = self.video {
            write!(f, " {}", res)?;
        }
        write!(f, " @{}fps", self.fps)
    }
}

/// A frame delivered by a streaming sensor: either a single stream's frame
/// or a frameset bundling several.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Single {
        profile: StreamProfile,
        frame_number: u64,
    },
    Set(Vec<Frame>),
}

impl Frame {
    pub fn single(profile: StreamProfile, frame_number: u64) -> Self {
        Self::Single {
            profile,
            frame_number,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Stream types carried by this frame, one entry per member frame.
    pub fn stream_types(&self) -> Vec<StreamType> {
        match self {
            Self::Single { profile, .. } => vec![profile.stream_type],
            Self::Set(frames) => frames.iter().flat_map(Frame::stream_types).collect(),
        }
    }
}
