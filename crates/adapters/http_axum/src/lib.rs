//! # homeswitch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **device API** consumed by the dashboard:
//!   - `GET  /devices`            — list devices as `{"devices": [...]}`
//!   - `POST /device/{device_id}` — publish an `ON` / `OFF` command
//! - Serve the **built dashboard** (wasm bundle, `index.html`) as static files
//!   for every path the API does not claim
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into JSON `{"error": ...}` responses
//!
//! ## Dependency rule
//! Depends on `homeswitch-app` (for port traits and services) and
//! `homeswitch-domain` (for payload types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
