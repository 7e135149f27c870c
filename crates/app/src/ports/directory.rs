//! Directory port — the backend's source of listed devices.

use std::future::Future;
use std::sync::Arc;

use homeswitch_domain::device::{Device, DeviceCollection, DeviceId};
use homeswitch_domain::error::HomeSwitchError;

/// Read access to the devices the backend exposes.
pub trait DeviceDirectory {
    /// All devices, in listing order.
    fn list(&self) -> impl Future<Output = Result<DeviceCollection, HomeSwitchError>> + Send;

    /// Look up one device.
    fn get(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HomeSwitchError>> + Send;
}

impl<T: DeviceDirectory + Send + Sync> DeviceDirectory for Arc<T> {
    fn list(&self) -> impl Future<Output = Result<DeviceCollection, HomeSwitchError>> + Send {
        (**self).list()
    }

    fn get(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HomeSwitchError>> + Send {
        (**self).get(id)
    }
}
