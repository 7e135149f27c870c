//! Toast notifications for command outcomes.

use homeswitch_app::ports::{Notification, NotificationKind, Notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen, in milliseconds.
const TOAST_TIMEOUT_MS: u32 = 5000;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub kind: NotificationKind,
    /// The message body to display.
    pub text: String,
}

impl ToastMessage {
    fn class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Failure => "toast toast-error",
        }
    }
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastProvider {
    /// Push a new toast. It auto-dismisses after 5 seconds.
    pub fn push(&self, kind: NotificationKind, text: String) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, kind, text });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

impl Notifier for ToastProvider {
    fn notify(&self, notification: Notification) {
        self.push(notification.kind, notification.text);
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    expect_context::<ToastProvider>()
}

/// Container component that provides toast context and renders active toasts.
///
/// Place this once near the root of the component tree (e.g. inside `<App/>`).
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
    };

    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = toast.class();
                        view! {
                            <div class=class>
                                <button class="toast-dismiss" on:click=move |_| provider.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
