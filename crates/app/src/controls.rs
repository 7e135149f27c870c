//! Control registry — maps each rendered `(device_id, status)` pair to a handler.
//!
//! The registry is rebuilt from every [`ListView`] so it only ever holds
//! handlers for controls that are currently on screen.

use std::collections::BTreeMap;

use homeswitch_domain::command::{ControlCommand, DeviceStatus};
use homeswitch_domain::device::DeviceId;

use crate::view::ListView;

/// Handlers keyed by the command their control sends.
#[derive(Debug, Clone)]
pub struct ControlRegistry<H> {
    handlers: BTreeMap<ControlCommand, H>,
}

impl<H> Default for ControlRegistry<H> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<H> ControlRegistry<H> {
    /// Register one handler per control in `view`, built by `make_handler`.
    pub fn bind(view: &ListView, mut make_handler: impl FnMut(&ControlCommand) -> H) -> Self {
        let handlers = view
            .blocks()
            .iter()
            .flat_map(|block| block.controls.iter())
            .map(|control| (control.command.clone(), make_handler(&control.command)))
            .collect();
        Self { handlers }
    }

    /// Handler for the control sending `status` to `device_id`.
    #[must_use]
    pub fn handler(&self, device_id: &DeviceId, status: DeviceStatus) -> Option<&H> {
        self.handlers.get(&ControlCommand::new(device_id.clone(), status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H: Fn()> ControlRegistry<H> {
    /// Run the handler registered for `(device_id, status)`.
    ///
    /// Returns `false` when no such control is on screen.
    pub fn dispatch(&self, device_id: &DeviceId, status: DeviceStatus) -> bool {
        match self.handler(device_id, status) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}
