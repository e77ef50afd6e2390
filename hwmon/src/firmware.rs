// hwmon/src/firmware.rs

//! Firmware version values parsed from the device info string.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Four-part firmware version `major.minor.patch.build`, ordered
/// component-wise from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl FirmwareVersion {
    pub const fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Parse `"5.12.7.100"`. One to four dot-separated numbers are
    /// accepted; missing trailing parts are zero.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidFirmwareVersion(s.to_string()));
        }

        let mut parts = [0u32; 4];
        let mut count = 0usize;
        for piece in trimmed.split('.') {
            if count == parts.len() {
                return Err(Error::InvalidFirmwareVersion(s.to_string()));
            }
            parts[count] = piece
                .parse::<u32>()
                .map_err(|_| Error::InvalidFirmwareVersion(s.to_string()))?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }

    /// True when this version is at least `minimum`.
    pub fn meets(&self, minimum: &FirmwareVersion) -> bool {
        self >= minimum
    }
}

impl FromStr for FirmwareVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FirmwareVersion {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}
