//! Backend port — the HTTP calls the dashboard makes.
//!
//! Adapters only move bytes: they return the status code and the raw body of
//! every response they receive, and fail with
//! [`HomeSwitchError::Network`] only when no response arrived at all.
//! Decoding and validation stay in the services so they can be tested
//! without a browser.

use std::future::Future;
use std::rc::Rc;

use homeswitch_domain::command::ControlCommand;
use homeswitch_domain::error::HomeSwitchError;

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the device backend.
pub trait DeviceBackend {
    /// `GET /devices`
    fn list_devices(&self) -> impl Future<Output = Result<HttpReply, HomeSwitchError>>;

    /// `POST /device/{device_id}` with body `{"status": ...}`.
    fn send_command(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<HttpReply, HomeSwitchError>>;
}

impl<T: DeviceBackend> DeviceBackend for Rc<T> {
    fn list_devices(&self) -> impl Future<Output = Result<HttpReply, HomeSwitchError>> {
        (**self).list_devices()
    }

    fn send_command(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<HttpReply, HomeSwitchError>> {
        (**self).send_command(command)
    }
}
