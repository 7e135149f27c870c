//! # homeswitch-adapter-mqtt
//!
//! MQTT adapter — delivers accepted device commands to a broker.
//!
//! ## Responsibilities
//! - Connect to an MQTT broker and keep the connection alive
//! - Publish `ON` / `OFF` on `{topic_prefix}/{device_id}` through the
//!   [`CommandPublisher`](homeswitch_app::ports::CommandPublisher) port
//!
//! ## Dependency rule
//! Same as other adapters: depends on `homeswitch-app` and `homeswitch-domain`.

pub mod config;
pub mod error;
pub mod publisher;

pub use config::MqttConfig;
pub use error::MqttError;
pub use publisher::MqttCommandPublisher;
