//! Dashboard client — wires the loader and the controller to one backend.
//!
//! The host calls [`HomeSwitchClient::start`] once when the page is ready
//! and [`HomeSwitchClient::control`] for every activated control. Each call
//! is meant to run as its own task; calls do not coordinate, so overlapping
//! loads draw in completion order.

use std::rc::Rc;

use homeswitch_domain::command::ControlCommand;

use crate::ports::{DeviceBackend, DeviceListSurface, Notifier};
use crate::services::device_controller::{ControlOutcome, DeviceController};
use crate::services::device_list_loader::{DeviceListLoader, LoadOutcome};

/// The two dashboard flows sharing one backend and one list surface.
pub struct HomeSwitchClient<B, S, N> {
    loader: Rc<DeviceListLoader<B, S>>,
    controller: DeviceController<B, N, Rc<DeviceListLoader<B, S>>>,
}

impl<B, S, N> HomeSwitchClient<B, S, N>
where
    B: DeviceBackend + Clone,
    S: DeviceListSurface,
    N: Notifier,
{
    pub fn new(backend: B, surface: S, notifier: N) -> Self {
        let loader = Rc::new(DeviceListLoader::new(backend.clone(), surface));
        let controller = DeviceController::new(backend, notifier, Rc::clone(&loader));
        Self { loader, controller }
    }

    /// Application start: load and draw the list once.
    pub async fn start(&self) -> LoadOutcome {
        tracing::debug!("starting dashboard");
        self.loader.load().await
    }

    /// Reload and redraw the list.
    pub async fn refresh(&self) -> LoadOutcome {
        self.loader.load().await
    }

    /// Send one command; the list is reloaded if the backend accepts it.
    pub async fn control(&self, command: ControlCommand) -> ControlOutcome {
        self.controller.control(command).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ports::{HttpReply, Notification};
    use crate::services::device_list_loader::tests::{RecordingSurface, ScriptedBackend, ok};
    use crate::view::ListView;

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<Notification>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    #[tokio::test]
    async fn should_load_once_on_start() {
        let backend = Rc::new(
            ScriptedBackend::default()
                .with_listing(ok(r#"{"devices":[{"device_id":"a","device_name":"A"}]}"#)),
        );
        let surface = Rc::new(RecordingSurface::default());
        let client = HomeSwitchClient::new(
            Rc::clone(&backend),
            Rc::clone(&surface),
            RecordingNotifier::default(),
        );

        let outcome = client.start().await;

        assert_eq!(outcome, LoadOutcome::Rendered { devices: 1 });
        assert_eq!(*backend.list_calls.borrow(), 1);
        assert_eq!(surface.shown.borrow().len(), 1);
    }

    #[tokio::test]
    async fn should_run_start_click_refresh_flow() {
        let backend = Rc::new(
            ScriptedBackend::default()
                .with_listing(ok(r#"{"devices":[{"device_id":"a","device_name":"A"}]}"#))
                .with_command_reply(ok(r#"{"message":"Device a turned ON"}"#))
                .with_listing(ok(r#"{"devices":[{"device_id":"a","device_name":"Renamed"}]}"#)),
        );
        let surface = Rc::new(RecordingSurface::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let client = HomeSwitchClient::new(
            Rc::clone(&backend),
            Rc::clone(&surface),
            Rc::clone(&notifier),
        );

        client.start().await;
        let first = surface.last().unwrap();
        let command = first.blocks()[0].controls[0].command.clone();
        let outcome = client.control(command).await;

        assert_eq!(
            outcome,
            ControlOutcome::Applied {
                refresh: LoadOutcome::Rendered { devices: 1 }
            }
        );
        assert_eq!(*backend.list_calls.borrow(), 2);
        assert_eq!(surface.last().unwrap().blocks()[0].heading, "Renamed (a)");
        assert_eq!(
            *notifier.0.borrow(),
            [Notification::success("Device a turned ON")]
        );
    }

    #[tokio::test]
    async fn should_stay_usable_after_a_failed_start() {
        let backend = Rc::new(
            ScriptedBackend::default()
                .with_listing(Ok(HttpReply::new(500, "oops")))
                .with_listing(ok(r#"{"devices":[]}"#)),
        );
        let surface = Rc::new(RecordingSurface::default());
        let client = HomeSwitchClient::new(
            Rc::clone(&backend),
            Rc::clone(&surface),
            RecordingNotifier::default(),
        );

        assert_eq!(client.start().await, LoadOutcome::Failed);
        assert_eq!(surface.last(), Some(ListView::LoadError));

        assert_eq!(client.refresh().await, LoadOutcome::Rendered { devices: 0 });
        assert_eq!(surface.last(), Some(ListView::Empty));
    }
}
