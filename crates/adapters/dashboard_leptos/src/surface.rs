//! Device list surface backed by a Leptos signal.

use homeswitch_app::ports::DeviceListSurface;
use homeswitch_app::view::ListView;
use leptos::prelude::*;

/// Holds the last drawn [`ListView`]; `None` until the first load finishes.
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    list: RwSignal<Option<ListView>>,
}

impl SignalSurface {
    pub fn new(list: RwSignal<Option<ListView>>) -> Self {
        Self { list }
    }
}

impl DeviceListSurface for SignalSurface {
    fn show(&self, view: ListView) {
        self.list.set(Some(view));
    }
}
