//! In-process device directory seeded at startup.

use std::future::Future;

use homeswitch_domain::device::{Device, DeviceCollection, DeviceId};
use homeswitch_domain::error::HomeSwitchError;

use crate::ports::DeviceDirectory;

/// Fixed set of devices held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceDirectory {
    devices: DeviceCollection,
}

impl InMemoryDeviceDirectory {
    #[must_use]
    pub fn new(devices: DeviceCollection) -> Self {
        Self { devices }
    }
}

impl DeviceDirectory for InMemoryDeviceDirectory {
    fn list(&self) -> impl Future<Output = Result<DeviceCollection, HomeSwitchError>> + Send {
        let devices = self.devices.clone();
        async { Ok(devices) }
    }

    fn get(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HomeSwitchError>> + Send {
        let device = self.devices.get(id).cloned();
        async { Ok(device) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_list_nothing_when_empty() {
        let directory = InMemoryDeviceDirectory::default();
        assert!(directory.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_get_seeded_device() {
        let id = DeviceId::new("light_1").unwrap();
        let directory = InMemoryDeviceDirectory::new(
            DeviceCollection::new(vec![Device::new(id.clone(), "Lamp")]).unwrap(),
        );

        let found = directory.get(&id).await.unwrap();
        assert_eq!(found.map(|d| d.device_name), Some("Lamp".to_string()));

        let missing = directory.get(&DeviceId::new("x").unwrap()).await.unwrap();
        assert!(missing.is_none());
    }
}
