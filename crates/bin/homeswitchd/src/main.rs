//! # homeswitchd — homeswitch daemon
//!
//! Composition root that wires the device API together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Seed the in-memory device directory from `[[devices]]`
//! - Connect the MQTT command publisher (or the in-memory command log when
//!   MQTT is disabled) and construct the device service
//! - Build the axum router, serving the dashboard assets when configured
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use homeswitch_adapter_http_axum::state::AppState;
use homeswitch_adapter_mqtt::MqttCommandPublisher;
use homeswitch_app::command_log::CommandLog;
use homeswitch_app::directory::InMemoryDeviceDirectory;
use homeswitch_app::ports::CommandPublisher;
use homeswitch_app::services::device_service::DeviceService;

use crate::config::Config;

/// Number of published commands kept in memory when MQTT is disabled.
const COMMAND_LOG_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Devices
    let devices = config.device_collection()?;
    tracing::info!(count = devices.len(), "loaded device directory");
    let directory = InMemoryDeviceDirectory::new(devices);

    // Commands
    if config.mqtt.enabled {
        let (publisher, _eventloop) = MqttCommandPublisher::connect(&config.mqtt);
        serve(&config, directory, publisher).await
    } else {
        tracing::warn!("MQTT disabled, commands are only recorded in memory");
        let command_log = Arc::new(CommandLog::new(COMMAND_LOG_CAPACITY));
        serve(&config, directory, command_log).await
    }
}

async fn serve<P>(
    config: &Config,
    directory: InMemoryDeviceDirectory,
    publisher: P,
) -> Result<(), Box<dyn std::error::Error>>
where
    P: CommandPublisher + Send + Sync + 'static,
{
    // Services
    let device_service =
        DeviceService::with_topic_prefix(directory, publisher, config.mqtt.topic_prefix.as_str());

    // HTTP
    let state = AppState::new(device_service);
    let app = homeswitch_adapter_http_axum::router::build(
        state,
        config.dashboard.assets_dir.as_deref(),
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "homeswitchd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homeswitchd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
