//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homeswitch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use homeswitch_adapter_mqtt::MqttConfig;
use homeswitch_domain::device::{Device, DeviceCollection, DeviceId};
use homeswitch_domain::error::ValidationError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Dashboard hosting settings.
    pub dashboard: DashboardConfig,
    /// Broker connection and command topic settings.
    pub mqtt: MqttConfig,
    /// Devices listed by `GET /devices`.
    pub devices: Vec<DeviceConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Dashboard hosting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the built dashboard (`trunk build` output).
    /// Nothing is served besides the API when unset.
    pub assets_dir: Option<PathBuf>,
}

/// One entry of the `[[devices]]` list.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub device_id: String,
    pub device_name: String,
}

impl Config {
    /// Load configuration from `homeswitch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homeswitch.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMESWITCH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOMESWITCH_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("HOMESWITCH_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMESWITCH_MQTT_HOST") {
            self.mqtt.broker_host = val;
        }
        if let Ok(val) = std::env::var("HOMESWITCH_MQTT_PORT")
            && let Ok(port) = val.parse()
        {
            self.mqtt.broker_port = port;
        }
        if let Ok(val) = std::env::var("HOMESWITCH_ASSETS") {
            self.dashboard.assets_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("HOMESWITCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.mqtt.enabled && self.mqtt.broker_port == 0 {
            return Err(ConfigError::Validation(
                "mqtt broker port must be non-zero".to_string(),
            ));
        }
        self.device_collection()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the device collection from the `[[devices]]` list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Devices`] for an empty or duplicated id.
    pub fn device_collection(&self) -> Result<DeviceCollection, ConfigError> {
        let devices = self
            .devices
            .iter()
            .map(|entry| {
                Ok(Device::new(
                    DeviceId::new(entry.device_id.as_str())?,
                    entry.device_name.as_str(),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(DeviceCollection::new(devices)?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homeswitchd=info,homeswitch=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Invalid `[[devices]]` entry.
    #[error("invalid device list: {0}")]
    Devices(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.mqtt.topic_prefix, "home/device");
        assert!(config.dashboard.assets_dir.is_none());
        assert!(config.devices.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [dashboard]
            assets_dir = 'dist'

            [mqtt]
            broker_host = 'broker.lan'
            broker_port = 1884
            client_id = 'homeswitch-test'
            topic_prefix = 'house/switch'

            [[devices]]
            device_id = 'light_1'
            device_name = 'Living room lamp'

            [[devices]]
            device_id = 'fan_1'
            device_name = 'Ceiling fan'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.dashboard.assets_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.mqtt.broker_host, "broker.lan");
        assert_eq!(config.mqtt.broker_port, 1884);
        assert_eq!(config.mqtt.client_id, "homeswitch-test");
        assert_eq!(config.mqtt.topic_prefix, "house/switch");
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.devices[1].device_name, "Ceiling fan");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_zero_broker_port_when_mqtt_is_enabled() {
        let mut config = Config::default();
        config.mqtt.broker_port = 0;
        assert!(config.validate().is_err());

        config.mqtt.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_build_device_collection_in_file_order() {
        let toml = "
            [[devices]]
            device_id = 'b'
            device_name = 'B'

            [[devices]]
            device_id = 'a'
            device_name = 'A'
        ";
        let config: Config = toml::from_str(toml).unwrap();

        let devices = config.device_collection().unwrap();

        let ids: Vec<_> = devices.iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn should_reject_duplicate_device_ids() {
        let mut config = Config::default();
        config.devices = vec![
            DeviceConfig {
                device_id: "a".to_string(),
                device_name: "One".to_string(),
            },
            DeviceConfig {
                device_id: "a".to_string(),
                device_name: "Two".to_string(),
            },
        ];

        assert!(matches!(config.validate(), Err(ConfigError::Devices(_))));
    }

    #[test]
    fn should_reject_empty_device_id() {
        let mut config = Config::default();
        config.devices = vec![DeviceConfig {
            device_id: String::new(),
            device_name: "Nameless".to_string(),
        }];

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Devices(ValidationError::EmptyDeviceId))
        ));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
