//! Publisher port — delivers accepted commands to the devices.

use std::future::Future;
use std::sync::Arc;

use homeswitch_domain::command::DeviceStatus;
use homeswitch_domain::error::HomeSwitchError;

/// Sends a status payload (`ON` / `OFF`) on a device topic.
pub trait CommandPublisher {
    fn publish(
        &self,
        topic: &str,
        status: DeviceStatus,
    ) -> impl Future<Output = Result<(), HomeSwitchError>> + Send;
}

impl<T: CommandPublisher + Send + Sync> CommandPublisher for Arc<T> {
    fn publish(
        &self,
        topic: &str,
        status: DeviceStatus,
    ) -> impl Future<Output = Result<(), HomeSwitchError>> + Send {
        (**self).publish(topic, status)
    }
}
