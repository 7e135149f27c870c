//! Device service — the backend use-cases behind `/devices` and `/device/{id}`.

use homeswitch_domain::command::ControlCommand;
use homeswitch_domain::device::DeviceCollection;
use homeswitch_domain::error::{HomeSwitchError, NotFoundError};
use homeswitch_domain::payload::CommandAccepted;

use crate::ports::{CommandPublisher, DeviceDirectory};

/// Topic prefix used when none is configured.
pub const DEFAULT_TOPIC_PREFIX: &str = "home/device";

/// Application service listing devices and publishing their commands.
pub struct DeviceService<D, P> {
    directory: D,
    publisher: P,
    topic_prefix: String,
}

impl<D, P> DeviceService<D, P>
where
    D: DeviceDirectory,
    P: CommandPublisher,
{
    /// Create a service publishing on `{DEFAULT_TOPIC_PREFIX}/{device_id}`.
    pub fn new(directory: D, publisher: P) -> Self {
        Self::with_topic_prefix(directory, publisher, DEFAULT_TOPIC_PREFIX)
    }

    /// Create a service publishing on `{topic_prefix}/{device_id}`.
    pub fn with_topic_prefix(directory: D, publisher: P, topic_prefix: impl Into<String>) -> Self {
        let topic_prefix = topic_prefix.into().trim_end_matches('/').to_string();
        Self {
            directory,
            publisher,
            topic_prefix,
        }
    }

    /// List every device known to the directory.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the directory.
    pub async fn list_devices(&self) -> Result<DeviceCollection, HomeSwitchError> {
        self.directory.list().await
    }

    /// Topic the given device listens on.
    #[must_use]
    pub fn topic_for(&self, command: &ControlCommand) -> String {
        format!("{}/{}", self.topic_prefix, command.device_id)
    }

    /// Publish a command for a known device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSwitchError::NotFound`] when the device is not in the
    /// directory, or [`HomeSwitchError::Publish`] when the publisher fails.
    #[tracing::instrument(skip(self, command), fields(device_id = %command.device_id, status = %command.status))]
    pub async fn send_command(
        &self,
        command: ControlCommand,
    ) -> Result<CommandAccepted, HomeSwitchError> {
        if self.directory.get(&command.device_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Device",
                id: command.device_id.to_string(),
            }
            .into());
        }

        let topic = self.topic_for(&command);
        self.publisher.publish(&topic, command.status).await?;
        tracing::info!(%topic, "command published");

        Ok(CommandAccepted {
            message: Some(format!(
                "Device {} turned {}",
                command.device_id, command.status
            )),
            topic: Some(topic),
        })
    }
}
