//! HTTP backend wrapping `gloo-net` for `GET /devices` and `POST /device/{id}`.

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use homeswitch_app::ports::{DeviceBackend, HttpReply};
use homeswitch_domain::command::ControlCommand;
use homeswitch_domain::error::{HomeSwitchError, NetworkError};
use homeswitch_domain::payload::{CommandBody, device_path};

/// Where the backend lives.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Prefix of every request URL; empty means the page's own origin.
    pub base_url: String,
}

impl ClientConfig {
    /// Talk to the server that served the dashboard.
    pub fn same_origin() -> Self {
        Self::default()
    }

    fn devices_url(&self) -> String {
        format!("{}/devices", self.base_url)
    }

    fn device_url(&self, command: &ControlCommand) -> String {
        format!("{}{}", self.base_url, device_path(&command.device_id))
    }
}

/// [`DeviceBackend`] issuing real `fetch` requests.
#[derive(Debug, Clone)]
pub struct GlooBackend {
    config: Rc<ClientConfig>,
}

impl GlooBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl DeviceBackend for GlooBackend {
    async fn list_devices(&self) -> Result<HttpReply, HomeSwitchError> {
        let resp = Request::get(&self.config.devices_url())
            .send()
            .await
            .map_err(network)?;
        into_reply(resp).await
    }

    async fn send_command(&self, command: &ControlCommand) -> Result<HttpReply, HomeSwitchError> {
        let body = CommandBody {
            status: command.status,
        };
        let resp = Request::post(&self.config.device_url(command))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        into_reply(resp).await
    }
}

/// Keep the raw status and body; interpreting them is up to the caller.
async fn into_reply(resp: Response) -> Result<HttpReply, HomeSwitchError> {
    let status = resp.status();
    let body = resp.binary().await.map_err(network)?;
    Ok(HttpReply::new(status, body))
}

fn network(err: gloo_net::Error) -> HomeSwitchError {
    NetworkError::new(err.to_string()).into()
}
