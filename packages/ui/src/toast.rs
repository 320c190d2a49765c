//! Transient, non-blocking notifications.
//!
//! Every failure the client catches ends up here as a toast; nothing is ever
//! fatal to the UI. Entries auto-dismiss after a few seconds and can always
//! be dismissed by clicking them.

use dioxus::prelude::*;

const TOAST_DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

pub fn use_toast() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast onto the shared list and schedule its removal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut state = toasts.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;

        toasts.write().entries.retain(|t| t.id != id);
    });
}

/// Provider that owns the toast list and renders it in a fixed overlay.
/// Wrap the app with this component; views reach it through [`use_toast`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toast();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().entries.retain(|t| t.id != id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
