//! # homeswitch-domain
//!
//! Pure domain model for the homeswitch device dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifiers and error conventions
//! - Define **Devices** (controllable things with a stable id and a display name)
//! - Define **Control commands** (one-shot `ON` / `OFF` requests for a device)
//! - Define the **wire payloads** exchanged with the backend and validate
//!   device listings all-or-nothing
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod command;
pub mod device;
pub mod payload;
