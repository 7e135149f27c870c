//! MQTT connection configuration.

use serde::Deserialize;

use homeswitch_app::services::device_service::DEFAULT_TOPIC_PREFIX;

/// Configuration for the MQTT command publisher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// Publish to the broker; when off, commands are only recorded locally.
    pub enabled: bool,
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Commands are published on `{topic_prefix}/{device_id}`.
    pub topic_prefix: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// Number of outgoing requests buffered while the broker is unreachable.
    pub queue_capacity: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "homeswitch".to_string(),
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            keep_alive_secs: 30,
            queue_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = MqttConfig::default();
        assert!(config.enabled);
        assert_eq!(config.broker_host, "localhost");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.client_id, "homeswitch");
        assert_eq!(config.topic_prefix, "home/device");
        assert_eq!(config.keep_alive_secs, 30);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            enabled = false
            broker_host = "mqtt.example.com"
            broker_port = 8883
            client_id = "switchboard"
            topic_prefix = "house/switch"
            keep_alive_secs = 60
            queue_capacity = 8
        "#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.broker_host, "mqtt.example.com");
        assert_eq!(config.broker_port, 8883);
        assert_eq!(config.client_id, "switchboard");
        assert_eq!(config.topic_prefix, "house/switch");
        assert_eq!(config.keep_alive_secs, 60);
        assert_eq!(config.queue_capacity, 8);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"broker_host = "192.168.1.100""#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "192.168.1.100");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.topic_prefix, "home/device");
    }
}
