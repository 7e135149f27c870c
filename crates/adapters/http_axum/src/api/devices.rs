//! JSON handlers for devices.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homeswitch_app::ports::{CommandPublisher, DeviceDirectory};
use homeswitch_domain::command::ControlCommand;
use homeswitch_domain::error::ValidationError;
use homeswitch_domain::payload::{CommandAccepted, DeviceListing};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /device/{device_id}`.
///
/// `status` is optional here so that a missing value is reported with the
/// dedicated validation message rather than a generic decoding error.
#[derive(Debug, Default, Deserialize)]
pub struct ControlRequest {
    pub status: Option<String>,
}

impl ControlRequest {
    /// Decode a raw body; anything that is not a JSON object with a string
    /// `status` counts as a missing status.
    fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DeviceListing>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Accepted(Json<CommandAccepted>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(json) => json.into_response(),
        }
    }
}

/// `GET /devices`
pub async fn list<D, P>(State(state): State<AppState<D, P>>) -> Result<ListResponse, ApiError>
where
    D: DeviceDirectory + Send + Sync + 'static,
    P: CommandPublisher + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(DeviceListing::from(&devices))))
}

/// `POST /device/{device_id}`
pub async fn control<D, P>(
    State(state): State<AppState<D, P>>,
    Path(device_id): Path<String>,
    body: Bytes,
) -> Result<ControlResponse, ApiError>
where
    D: DeviceDirectory + Send + Sync + 'static,
    P: CommandPublisher + Send + Sync + 'static,
{
    let status = ControlRequest::from_body(&body)
        .status
        .ok_or(ValidationError::MissingStatus)?;
    let command = ControlCommand::parse(&device_id, &status)?;
    let accepted = state.device_service.send_command(command).await?;
    Ok(ControlResponse::Accepted(Json(accepted)))
}
