//! [`CommandPublisher`] backed by a rumqttc [`AsyncClient`].

use std::future::Future;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::task::JoinHandle;

use homeswitch_app::ports::CommandPublisher;
use homeswitch_domain::command::DeviceStatus;
use homeswitch_domain::error::HomeSwitchError;

use crate::config::MqttConfig;
use crate::error::MqttError;

/// Pause before polling again after a connection error.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Publishes each command payload (`ON` / `OFF`) on its device topic.
///
/// Publishing only enqueues the message; the event loop spawned by
/// [`MqttCommandPublisher::connect`] delivers it. When the queue is full
/// (broker unreachable for a while) the command fails instead of waiting.
#[derive(Debug, Clone)]
pub struct MqttCommandPublisher {
    client: AsyncClient,
}

impl MqttCommandPublisher {
    /// Wrap an existing client whose event loop is driven elsewhere.
    #[must_use]
    pub fn new(client: AsyncClient) -> Self {
        Self { client }
    }

    /// Create a client for the configured broker and spawn its event loop.
    ///
    /// The returned handle runs until the runtime shuts down; connection
    /// errors are logged and retried.
    #[must_use]
    pub fn connect(config: &MqttConfig) -> (Self, JoinHandle<()>) {
        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));
        let (client, eventloop) = AsyncClient::new(options, config.queue_capacity.max(1));

        tracing::info!(
            host = %config.broker_host,
            port = config.broker_port,
            client_id = %config.client_id,
            "starting MQTT client"
        );
        let handle = tokio::spawn(drive(eventloop));
        (Self::new(client), handle)
    }
}

async fn drive(mut eventloop: EventLoop) {
    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!("connected to MQTT broker");
            }
            Ok(event) => {
                tracing::trace!(?event, "MQTT event");
            }
            Err(err) => {
                tracing::warn!(error = %err, "MQTT connection error, retrying");
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

impl CommandPublisher for MqttCommandPublisher {
    fn publish(
        &self,
        topic: &str,
        status: DeviceStatus,
    ) -> impl Future<Output = Result<(), HomeSwitchError>> + Send {
        let client = self.client.clone();
        let topic = topic.to_string();
        async move {
            client
                .try_publish(
                    topic.clone(),
                    QoS::AtLeastOnce,
                    false,
                    status.as_str().as_bytes().to_vec(),
                )
                .map_err(MqttError::Client)?;
            tracing::debug!(%topic, payload = status.as_str(), "command queued for broker");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(capacity: usize) -> (AsyncClient, EventLoop) {
        AsyncClient::new(
            MqttOptions::new("homeswitch-test", "localhost", 1883),
            capacity,
        )
    }

    #[tokio::test]
    async fn should_queue_command_while_event_loop_is_alive() {
        let (client, _eventloop) = client(4);
        let publisher = MqttCommandPublisher::new(client);

        let result = publisher.publish("home/device/light_1", DeviceStatus::On).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_queue_is_full() {
        let (client, _eventloop) = client(1);
        let publisher = MqttCommandPublisher::new(client);

        publisher
            .publish("home/device/a", DeviceStatus::On)
            .await
            .unwrap();
        let result = publisher.publish("home/device/b", DeviceStatus::Off).await;

        assert!(matches!(result, Err(HomeSwitchError::Publish(_))));
    }

    #[tokio::test]
    async fn should_fail_when_event_loop_is_gone() {
        let (client, eventloop) = client(4);
        drop(eventloop);
        let publisher = MqttCommandPublisher::new(client);

        let result = publisher.publish("home/device/a", DeviceStatus::On).await;

        assert!(matches!(result, Err(HomeSwitchError::Publish(_))));
    }

    #[tokio::test]
    async fn should_not_enqueue_before_the_publish_is_awaited() {
        let (client, _eventloop) = client(1);
        let publisher = MqttCommandPublisher::new(client);

        let pending = publisher.publish("home/device/a", DeviceStatus::On);
        drop(pending);

        assert!(
            publisher
                .publish("home/device/a", DeviceStatus::On)
                .await
                .is_ok()
        );
    }
}
