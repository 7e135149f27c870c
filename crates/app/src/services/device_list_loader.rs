//! Device list loader — fetches the device collection and redraws the list.

use std::future::Future;
use std::rc::Rc;

use homeswitch_domain::device::DeviceCollection;
use homeswitch_domain::error::HomeSwitchError;
use homeswitch_domain::payload::decode_device_listing;

use crate::ports::{DeviceBackend, DeviceListSurface};
use crate::view::{ListView, render_into};

/// How a load attempt ended. The surface has been updated in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many device blocks.
    Rendered { devices: usize },
    /// The list was replaced with the load error message.
    Failed,
}

/// Something that can redraw the device list from the backend.
pub trait Refresh {
    fn refresh(&self) -> impl Future<Output = LoadOutcome>;
}

impl<T: Refresh> Refresh for Rc<T> {
    fn refresh(&self) -> impl Future<Output = LoadOutcome> {
        (**self).refresh()
    }
}

/// Requests `GET /devices` and replaces the list with the result.
pub struct DeviceListLoader<B, S> {
    backend: B,
    surface: S,
}

impl<B: DeviceBackend, S: DeviceListSurface> DeviceListLoader<B, S> {
    /// Create a loader drawing into `surface`.
    pub fn new(backend: B, surface: S) -> Self {
        Self { backend, surface }
    }

    /// Fetch and validate the device collection without touching the surface.
    ///
    /// The status code is not consulted: whatever the backend answered must
    /// carry a valid `devices` array.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSwitchError::Network`] when the request fails, or
    /// [`HomeSwitchError::MalformedResponse`] when the body is not a valid
    /// listing.
    pub async fn fetch(&self) -> Result<DeviceCollection, HomeSwitchError> {
        let reply = self.backend.list_devices().await?;
        if !reply.is_success() {
            tracing::warn!(status = reply.status, "device listing returned a non-success status");
        }
        Ok(decode_device_listing(&reply.body)?)
    }

    /// Fetch the collection and redraw the list.
    ///
    /// Never fails: errors are logged and shown as the load error message.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> LoadOutcome {
        match self.fetch().await {
            Ok(devices) => {
                tracing::debug!(count = devices.len(), "rendering devices");
                render_into(&devices, &self.surface);
                LoadOutcome::Rendered {
                    devices: devices.len(),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching devices");
                self.surface.show(ListView::LoadError);
                LoadOutcome::Failed
            }
        }
    }
}

impl<B: DeviceBackend, S: DeviceListSurface> Refresh for DeviceListLoader<B, S> {
    fn refresh(&self) -> impl Future<Output = LoadOutcome> {
        self.load()
    }
}
