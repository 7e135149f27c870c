//! Shared application state for axum handlers.

use std::sync::Arc;

use homeswitch_app::ports::{CommandPublisher, DeviceDirectory};
use homeswitch_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the directory and publisher to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<D, P> {
    /// Device listing and command service.
    pub device_service: Arc<DeviceService<D, P>>,
}

impl<D, P> Clone for AppState<D, P> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<D, P> AppState<D, P>
where
    D: DeviceDirectory + Send + Sync + 'static,
    P: CommandPublisher + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<D, P>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
