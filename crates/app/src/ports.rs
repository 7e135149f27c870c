//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Dashboard-side ports ([`DeviceBackend`], [`DeviceListSurface`],
//! [`Notifier`]) do not require `Send`: browser futures are single-threaded.

pub mod backend;
pub mod directory;
pub mod display;
pub mod publisher;

pub use backend::{DeviceBackend, HttpReply};
pub use directory::DeviceDirectory;
pub use display::{DeviceListSurface, Notification, NotificationKind, Notifier};
pub use publisher::CommandPublisher;
