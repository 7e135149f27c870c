//! Device — a controllable thing identified by a stable id and a display name.
//!
//! Devices are owned by the backend. The client only ever sees them as a
//! [`DeviceCollection`] freshly decoded from a listing response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Stable, backend-assigned device identifier (e.g. `light_1`).
///
/// Opaque to the client; the only invariant is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceId`] when `raw` is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyDeviceId);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeviceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DeviceId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

/// A device as listed by the backend.
///
/// Listing entries may carry extra attributes; only the two fields below are
/// read and unknown ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: DeviceId,
    pub device_name: String,
}

impl Device {
    #[must_use]
    pub fn new(device_id: DeviceId, device_name: impl Into<String>) -> Self {
        Self {
            device_id,
            device_name: device_name.into(),
        }
    }

    /// Text identifying the device in a list: `"{name} ({id})"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.device_name, self.device_id)
    }
}

/// Ordered devices exactly as returned by the backend.
///
/// Construction goes through [`DeviceCollection::new`], which rejects
/// duplicate ids so a collection can be indexed by [`DeviceId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceCollection(Vec<Device>);

impl DeviceCollection {
    /// Build a collection, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateDeviceId`] for the first id seen twice.
    pub fn new(devices: Vec<Device>) -> Result<Self, ValidationError> {
        let mut seen = std::collections::HashSet::with_capacity(devices.len());
        for device in &devices {
            if !seen.insert(device.device_id.as_str()) {
                return Err(ValidationError::DuplicateDeviceId(
                    device.device_id.to_string(),
                ));
            }
        }
        Ok(Self(devices))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.0.iter()
    }

    /// Find a device by id.
    #[must_use]
    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.0.iter().find(|d| &d.device_id == id)
    }
}

impl<'a> IntoIterator for &'a DeviceCollection {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, name: &str) -> Device {
        Device::new(DeviceId::new(id).unwrap(), name)
    }

    #[test]
    fn should_reject_empty_device_id() {
        assert_eq!(DeviceId::new(""), Err(ValidationError::EmptyDeviceId));
    }

    #[test]
    fn should_parse_device_id_from_str() {
        let id: DeviceId = "light_1".parse().unwrap();
        assert_eq!(id.as_str(), "light_1");
        assert_eq!(id.to_string(), "light_1");
    }

    #[test]
    fn should_serialize_device_id_as_plain_string() {
        let id = DeviceId::new("fan").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"fan\"");
    }

    #[test]
    fn should_refuse_to_deserialize_empty_device_id() {
        let result: Result<DeviceId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn should_label_device_with_name_and_id() {
        assert_eq!(device("light_1", "Lamp").label(), "Lamp (light_1)");
    }

    #[test]
    fn should_ignore_unknown_fields_when_deserializing_device() {
        let json = serde_json::json!({
            "device_id": "light_1",
            "device_name": "Lamp",
            "room": "kitchen"
        });
        let parsed: Device = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, device("light_1", "Lamp"));
    }

    #[test]
    fn should_preserve_order_in_collection() {
        let collection =
            DeviceCollection::new(vec![device("b", "Second"), device("a", "First")]).unwrap();
        let ids: Vec<_> = collection.iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn should_reject_duplicate_ids_in_collection() {
        let result = DeviceCollection::new(vec![device("a", "One"), device("a", "Two")]);
        assert_eq!(
            result,
            Err(ValidationError::DuplicateDeviceId("a".to_string()))
        );
    }

    #[test]
    fn should_find_device_by_id() {
        let collection = DeviceCollection::new(vec![device("a", "One")]).unwrap();
        let id = DeviceId::new("a").unwrap();
        assert_eq!(collection.get(&id).map(|d| d.device_name.as_str()), Some("One"));
        assert!(collection.get(&DeviceId::new("z").unwrap()).is_none());
    }
}
