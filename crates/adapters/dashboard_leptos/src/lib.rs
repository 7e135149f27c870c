use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use homeswitch_app::client::HomeSwitchClient;
use homeswitch_app::view::ListView;
use homeswitch_domain::command::ControlCommand;

pub mod api;
mod components;
pub mod surface;

use api::{ClientConfig, GlooBackend};
use components::{DeviceList, ToastContainer, ToastProvider, use_toasts};
use surface::SignalSurface;

/// The dashboard client as wired in the browser.
pub type DashboardClient = HomeSwitchClient<GlooBackend, SignalSurface, ToastProvider>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <main>
                <h1>"Devices"</h1>
                <Dashboard/>
            </main>
        </ToastContainer>
    }
}

/// Wires the client to the page and loads the list once.
#[component]
fn Dashboard() -> impl IntoView {
    let list = RwSignal::new(None::<ListView>);
    let client: DashboardClient = HomeSwitchClient::new(
        GlooBackend::new(ClientConfig::same_origin()),
        SignalSurface::new(list),
        use_toasts(),
    );
    let client = StoredValue::new_local(Rc::new(client));

    spawn_local(async move {
        client.get_value().start().await;
    });

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        let client = client.get_value();
        spawn_local(async move {
            client.refresh().await;
        });
    };

    let on_control = Callback::new(move |command: ControlCommand| {
        let client = client.get_value();
        spawn_local(async move {
            client.control(command).await;
        });
    });

    view! {
        <button class="refresh" on:click=on_refresh>"Refresh"</button>
        <DeviceList list=list.read_only() on_control=on_control/>
    }
}
