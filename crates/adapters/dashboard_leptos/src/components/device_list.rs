//! The device list: one block per device with an ON and an OFF button.

use homeswitch_app::controls::ControlRegistry;
use homeswitch_app::view::{DeviceBlock, ListView};
use homeswitch_domain::command::ControlCommand;
use leptos::prelude::*;

use super::Loading;

/// Draws the current [`ListView`] and routes button clicks to `on_control`.
///
/// Handlers are re-bound every time the view changes, so a button only ever
/// sends the command of the block it was drawn in.
#[component]
pub fn DeviceList(
    /// Last drawn view; `None` while the first load is in flight.
    list: ReadSignal<Option<ListView>>,
    /// Invoked with the command of the clicked control.
    on_control: Callback<ControlCommand>,
) -> impl IntoView {
    view! {
        <div id="device-list">
            {move || match list.get() {
                None => view! { <Loading/> }.into_any(),
                Some(current) => render(&current, on_control),
            }}
        </div>
    }
}

/// Handlers for the controls currently on screen.
type Controls = StoredValue<ControlRegistry<Box<dyn Fn()>>, LocalStorage>;

fn render(current: &ListView, on_control: Callback<ControlCommand>) -> AnyView {
    if let Some(message) = current.message() {
        let class = if current.is_error() { "error" } else { "empty" };
        return view! { <p class=class>{message}</p> }.into_any();
    }

    let registry = ControlRegistry::bind(current, |command| {
        let command = command.clone();
        Box::new(move || on_control.run(command.clone())) as Box<dyn Fn()>
    });
    let controls: Controls = StoredValue::new_local(registry);

    current
        .blocks()
        .iter()
        .map(|block| device_block(block, controls))
        .collect_view()
        .into_any()
}

fn device_block(block: &DeviceBlock, controls: Controls) -> impl IntoView + use<> {
    let buttons = block
        .controls
        .iter()
        .map(|control| {
            let device_id = control.command.device_id.clone();
            let status = control.command.status;
            let label = control.label;
            view! {
                <button
                    class="control"
                    on:click=move |_| {
                        let dispatched = controls
                            .with_value(|registry| registry.dispatch(&device_id, status));
                        if !dispatched {
                            tracing::warn!(%device_id, %status, "no handler for control");
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="device" data-device-id=block.device_id.to_string()>
            <h3>{block.heading.clone()}</h3>
            {buttons}
        </div>
    }
}
