//! User avatar menu: cached profile fields and logout.

use dioxus::prelude::*;

use crate::{make_client, use_session, SessionState};

/// Avatar button with a dropdown showing the cached profile fields and a
/// logout item. Logout clears every stored session field, resets the session
/// context, and sends the browser back to the auth screen.
#[component]
pub fn UserMenu() -> Element {
    let mut session_state = use_session();
    let mut open = use_signal(|| false);

    let Some(session) = session_state().session else {
        return rsx! {};
    };

    let initials = {
        let initials = session.initials();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    };

    let handle_logout = move |_| {
        make_client().session().clear_session();
        session_state.set(SessionState {
            session: None,
            loading: false,
        });
        open.set(false);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth");
            }
        }
    };

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "user-menu-avatar",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                "{initials}"
            }
            if open() {
                div {
                    class: "user-menu-dropdown",
                    div {
                        class: "user-menu-profile",
                        p { class: "user-menu-name", "{session.full_name}" }
                        p { class: "user-menu-email", "{session.email}" }
                    }
                    hr { class: "user-menu-separator" }
                    button {
                        class: "user-menu-item",
                        onclick: handle_logout,
                        "Log out"
                    }
                }
            }
        }
    }
}
