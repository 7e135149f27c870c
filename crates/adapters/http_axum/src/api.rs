//! JSON API handlers.
//!
//! - `GET  /devices`            — list devices
//! - `POST /device/{device_id}` — send a command to one device

pub mod devices;

use axum::Router;
use axum::routing::{get, post};

use homeswitch_app::ports::{CommandPublisher, DeviceDirectory};

use crate::state::AppState;

/// API routes, mounted at the root so the dashboard can use same-origin paths.
pub fn routes<D, P>() -> Router<AppState<D, P>>
where
    D: DeviceDirectory + Send + Sync + 'static,
    P: CommandPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::list::<D, P>))
        .route("/device/{device_id}", post(devices::control::<D, P>))
}
