//! Device controller — sends one command and reports the outcome.

use homeswitch_domain::command::ControlCommand;
use homeswitch_domain::error::{CommandRejected, HomeSwitchError};
use homeswitch_domain::payload::{CommandAccepted, decode_command_accepted, decode_error_reason};

use crate::ports::{DeviceBackend, Notification, Notifier};
use crate::services::device_list_loader::{LoadOutcome, Refresh};

/// How a control attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// The backend accepted the command and the list was reloaded.
    Applied { refresh: LoadOutcome },
    /// The command failed; the list was left as it was.
    Failed,
}

/// Confirmation shown when the backend accepts a command without a message.
#[must_use]
pub fn default_confirmation(command: &ControlCommand) -> String {
    format!("Device {} updated to {}", command.device_id, command.status)
}

/// Notification shown when a command fails for any reason.
#[must_use]
pub fn failure_text(command: &ControlCommand) -> String {
    format!("Failed to update device {}.", command.device_id)
}

/// Posts a [`ControlCommand`], notifies the user, and refreshes on success.
///
/// Exactly one request is made per call; nothing is retried.
pub struct DeviceController<B, N, R> {
    backend: B,
    notifier: N,
    refresher: R,
}

impl<B, N, R> DeviceController<B, N, R>
where
    B: DeviceBackend,
    N: Notifier,
    R: Refresh,
{
    /// Create a controller that reloads the list through `refresher`.
    pub fn new(backend: B, notifier: N, refresher: R) -> Self {
        Self {
            backend,
            notifier,
            refresher,
        }
    }

    /// Send the command and decode the backend's verdict.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSwitchError::Network`] when the request fails,
    /// [`HomeSwitchError::CommandRejected`] on a non-2xx status, or
    /// [`HomeSwitchError::MalformedResponse`] when a 2xx body is not JSON.
    pub async fn send(&self, command: &ControlCommand) -> Result<CommandAccepted, HomeSwitchError> {
        let reply = self.backend.send_command(command).await?;
        if !reply.is_success() {
            return Err(CommandRejected {
                device_id: command.device_id.to_string(),
                status: reply.status,
                reason: decode_error_reason(&reply.body),
            }
            .into());
        }
        Ok(decode_command_accepted(&reply.body)?)
    }

    /// Send the command, notify the user, and refresh the list on success.
    ///
    /// Never fails: errors are logged and reported as a failure notification.
    #[tracing::instrument(skip(self, command), fields(device_id = %command.device_id, status = %command.status))]
    pub async fn control(&self, command: ControlCommand) -> ControlOutcome {
        match self.send(&command).await {
            Ok(accepted) => {
                let text = accepted
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| default_confirmation(&command));
                tracing::info!(topic = accepted.topic.as_deref(), "command accepted");
                self.notifier.notify(Notification::success(text));
                let refresh = self.refresher.refresh().await;
                ControlOutcome::Applied { refresh }
            }
            Err(err) => {
                tracing::error!(error = %err, "error controlling device");
                self.notifier.notify(Notification::failure(failure_text(&command)));
                ControlOutcome::Failed
            }
        }
    }
}
