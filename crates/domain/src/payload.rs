//! Wire payloads exchanged with the backend.
//!
//! | Endpoint | Request body | Response body |
//! |----------|--------------|---------------|
//! | `GET /devices` | — | [`DeviceListing`] |
//! | `POST /device/{id}` | [`CommandBody`] | [`CommandAccepted`] on 2xx, [`ErrorReply`] otherwise |
//!
//! Decoding of a listing is all-or-nothing: one bad entry rejects the whole
//! body, so callers never see a partial collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::DeviceStatus;
use crate::device::{Device, DeviceCollection, DeviceId};
use crate::error::MalformedResponse;

/// Body of `GET /devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceListing {
    pub devices: Vec<Device>,
}

impl From<&DeviceCollection> for DeviceListing {
    fn from(collection: &DeviceCollection) -> Self {
        Self {
            devices: collection.iter().cloned().collect(),
        }
    }
}

/// Body of `POST /device/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBody {
    pub status: DeviceStatus,
}

/// Success body of `POST /device/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandAccepted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Topic the command was published on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Failure body returned with any non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorReply {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }
}

/// Decode a `GET /devices` body into a validated collection.
///
/// # Errors
///
/// - [`MalformedResponse::InvalidJson`] if the body is not JSON
/// - [`MalformedResponse::MissingDevices`] if there is no `devices` field
/// - [`MalformedResponse::DevicesNotASequence`] if `devices` is not an array
/// - [`MalformedResponse::InvalidDevice`] for the first entry that does not
///   decode into a [`Device`]
/// - [`MalformedResponse::Invalid`] if two entries share an id
pub fn decode_device_listing(body: &[u8]) -> Result<DeviceCollection, MalformedResponse> {
    let value: Value =
        serde_json::from_slice(body).map_err(MalformedResponse::InvalidJson)?;
    let entries = value
        .get("devices")
        .ok_or(MalformedResponse::MissingDevices)?
        .as_array()
        .ok_or(MalformedResponse::DevicesNotASequence)?;

    let devices = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Device::deserialize(entry)
                .map_err(|source| MalformedResponse::InvalidDevice { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DeviceCollection::new(devices)?)
}

/// Decode the body of a successful command response.
///
/// Any JSON value is accepted. `message` and `topic` are picked up when they
/// are strings and ignored otherwise.
///
/// # Errors
///
/// Returns [`MalformedResponse::InvalidJson`] if the body is not JSON.
pub fn decode_command_accepted(body: &[u8]) -> Result<CommandAccepted, MalformedResponse> {
    let value: Value = serde_json::from_slice(body).map_err(MalformedResponse::InvalidJson)?;
    Ok(CommandAccepted {
        message: string_field(&value, "message"),
        topic: string_field(&value, "topic"),
    })
}

/// Best-effort extraction of the `error` field from a failure body.
///
/// Returns `None` when the body is empty, not JSON, or carries no string `error`.
#[must_use]
pub fn decode_error_reason(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    string_field(&value, "error")
}

fn string_field(value: &Value, name: &str) -> Option<String> {
    value.get(name).and_then(Value::as_str).map(str::to_string)
}

/// Path of the command endpoint for `device_id`, e.g. `/device/light_1`.
///
/// The id is percent-encoded as a single path segment; only RFC 3986
/// unreserved characters are left as they are.
#[must_use]
pub fn device_path(device_id: &DeviceId) -> String {
    let mut path = String::from("/device/");
    for byte in device_id.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            path.push(char::from(byte));
        } else {
            path.push_str(&format!("%{byte:02X}"));
        }
    }
    path
}
