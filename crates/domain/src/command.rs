//! Control commands — one-shot requests to switch a device on or off.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::DeviceId;
use crate::error::ValidationError;

/// Target status of a control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl DeviceStatus {
    /// Both statuses, in the order their controls are shown.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Wire representation, also used as the control label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Request to put one device into a given status.
///
/// Built per user action and dropped once the request completes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlCommand {
    pub device_id: DeviceId,
    pub status: DeviceStatus,
}

impl ControlCommand {
    #[must_use]
    pub fn new(device_id: DeviceId, status: DeviceStatus) -> Self {
        Self { device_id, status }
    }

    /// Build a command from raw strings, as received from a form or a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceId`] or
    /// [`ValidationError::UnknownStatus`] when an input is out of range.
    pub fn parse(device_id: &str, status: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            device_id: device_id.parse()?,
            status: status.parse()?,
        })
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.device_id, self.status)
    }
}
