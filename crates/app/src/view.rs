//! Device list rendering.
//!
//! [`render_device_list`] turns a collection into a [`ListView`]: a plain
//! description of what the list area must show. It is a pure function of
//! its input, holds no state, and knows nothing about HTML; adapters draw
//! the view however their framework wants.

use homeswitch_domain::command::{ControlCommand, DeviceStatus};
use homeswitch_domain::device::{Device, DeviceCollection, DeviceId};

use crate::ports::DeviceListSurface;

/// Shown instead of the list when the backend has no devices.
pub const NO_DEVICES_MESSAGE: &str = "No devices found.";

/// Shown instead of the list when loading it failed.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading devices.";

/// Content of the device list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// One block per device, in backend order.
    Devices(Vec<DeviceBlock>),
    /// The backend returned an empty collection.
    Empty,
    /// The last load failed.
    LoadError,
}

impl ListView {
    /// The informational or error message replacing the list, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Devices(_) => None,
            Self::Empty => Some(NO_DEVICES_MESSAGE),
            Self::LoadError => Some(LOAD_ERROR_MESSAGE),
        }
    }

    /// Whether the message is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::LoadError)
    }

    #[must_use]
    pub fn blocks(&self) -> &[DeviceBlock] {
        match self {
            Self::Devices(blocks) => blocks,
            Self::Empty | Self::LoadError => &[],
        }
    }
}

/// The labeled block rendered for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBlock {
    pub device_id: DeviceId,
    /// `"{device_name} ({device_id})"`
    pub heading: String,
    /// `ON` then `OFF`.
    pub controls: [Control; 2],
}

impl DeviceBlock {
    fn for_device(device: &Device) -> Self {
        Self {
            device_id: device.device_id.clone(),
            heading: device.label(),
            controls: DeviceStatus::ALL.map(|status| Control {
                label: status.as_str(),
                command: ControlCommand::new(device.device_id.clone(), status),
            }),
        }
    }
}

/// A button that sends one command when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub command: ControlCommand,
}

/// Render a device collection.
#[must_use]
pub fn render_device_list(devices: &DeviceCollection) -> ListView {
    if devices.is_empty() {
        return ListView::Empty;
    }
    ListView::Devices(devices.iter().map(DeviceBlock::for_device).collect())
}

/// Render a device collection and replace the surface content with it.
pub fn render_into(devices: &DeviceCollection, surface: &impl DeviceListSurface) {
    surface.show(render_device_list(devices));
}
