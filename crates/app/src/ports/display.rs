//! Display ports — where the dashboard shows the device list and notifications.

use std::rc::Rc;

use crate::view::ListView;

/// The area the device list is drawn into.
///
/// Each call to [`show`](Self::show) replaces everything shown before.
pub trait DeviceListSurface {
    fn show(&self, view: ListView);
}

impl<T: DeviceListSurface + ?Sized> DeviceListSurface for Rc<T> {
    fn show(&self, view: ListView) {
        (**self).show(view);
    }
}

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient message for the user (toast, alert, status line…).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            text: text.into(),
        }
    }
}

/// Delivers notifications to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
