//! # homeswitch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceBackend` — the two HTTP calls the dashboard makes
//!   - `DeviceListSurface` / `Notifier` — where the dashboard draws
//!   - `DeviceDirectory` / `CommandPublisher` — what the reference backend
//!     lists and where it sends commands
//! - Render a device collection into a framework-free [`view::ListView`] and
//!   bind its controls through a [`controls::ControlRegistry`]
//! - Drive the two dashboard flows: `DeviceListLoader` and `DeviceController`,
//!   composed by [`client::HomeSwitchClient`]
//! - Serve the backend side through `DeviceService`
//! - Provide **in-process infrastructure** (device directory, command log)
//!
//! ## Dependency rule
//! Depends on `homeswitch-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//! Everything on the dashboard path must also build for `wasm32-unknown-unknown`.

pub mod client;
pub mod command_log;
pub mod controls;
pub mod directory;
pub mod ports;
pub mod services;
pub mod view;
