//! MQTT adapter error types.

use homeswitch_domain::error::HomeSwitchError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client refused the request (queue full or event loop gone).
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),
}

impl From<MqttError> for HomeSwitchError {
    fn from(err: MqttError) -> Self {
        HomeSwitchError::Publish(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_client_error_to_publish_error() {
        let (client, eventloop) = rumqttc::AsyncClient::new(
            rumqttc::MqttOptions::new("homeswitch-test", "localhost", 1883),
            1,
        );
        drop(eventloop);
        let err = client
            .try_publish("t", rumqttc::QoS::AtLeastOnce, false, b"ON".to_vec())
            .unwrap_err();

        let err: HomeSwitchError = MqttError::Client(err).into();

        assert!(matches!(err, HomeSwitchError::Publish(_)));
    }
}
