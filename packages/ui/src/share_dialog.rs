//! Per-note sharing dialog.
//!
//! Two sections: invite individual users by email (read-only access, each
//! revocable), and a public link that anyone can open. The note passed in is
//! the transient copy from the last fetch; after every successful mutation
//! the dialog raises `on_changed` so the owner refetches and re-renders this
//! dialog with fresh sharing state.

use api::Note;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::icons::{FaEnvelope, FaGlobe, FaLink, FaTrashCan, FaUserGroup, FaXmark};
use crate::{make_client, push_toast, use_toast, Icon, ModalOverlay, ToastLevel};

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(_text: &str) {}

#[component]
pub fn ShareDialog(
    note: Note,
    on_close: EventHandler<()>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut sharing = use_signal(|| false);
    let mut generating = use_signal(|| false);

    let collaborators = note.collaborators().to_vec();
    let public_url = note.public_url.clone().filter(|url| !url.is_empty());

    let handle_share = {
        let note_id = note.id.clone();
        move |_| {
            let address = email().trim().to_string();
            if address.is_empty() {
                push_toast(&mut toasts, ToastLevel::Error, "Please enter an email address.");
                return;
            }
            let note_id = note_id.clone();
            spawn(async move {
                sharing.set(true);
                match make_client().share_note(&note_id, &address).await {
                    Ok(()) => {
                        push_toast(&mut toasts, ToastLevel::Success, "Note shared successfully.");
                        email.set(String::new());
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::error!("share note failed: {e}");
                        push_toast(&mut toasts, ToastLevel::Error, "Failed to share the note.");
                    }
                }
                sharing.set(false);
            });
        }
    };

    let handle_revoke_share = {
        let note_id = note.id.clone();
        move |user_id: String| {
            let note_id = note_id.clone();
            spawn(async move {
                match make_client().revoke_share(&note_id, &user_id).await {
                    Ok(()) => {
                        push_toast(&mut toasts, ToastLevel::Success, "Access revoked.");
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::error!("revoke share failed: {e}");
                        push_toast(&mut toasts, ToastLevel::Error, "Failed to revoke access.");
                    }
                }
            });
        }
    };

    let handle_generate_link = {
        let note_id = note.id.clone();
        move |_| {
            let note_id = note_id.clone();
            spawn(async move {
                generating.set(true);
                match make_client().generate_public_link(&note_id).await {
                    Ok(_) => {
                        push_toast(&mut toasts, ToastLevel::Success, "Public link generated.");
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::error!("generate public link failed: {e}");
                        push_toast(&mut toasts, ToastLevel::Error, "Failed to generate public link.");
                    }
                }
                generating.set(false);
            });
        }
    };

    let handle_revoke_link = {
        let note_id = note.id.clone();
        move |_| {
            let note_id = note_id.clone();
            spawn(async move {
                match make_client().revoke_public_link(&note_id).await {
                    Ok(()) => {
                        push_toast(&mut toasts, ToastLevel::Success, "Public link revoked.");
                        on_changed.call(());
                    }
                    Err(e) => {
                        tracing::error!("revoke public link failed: {e}");
                        push_toast(&mut toasts, ToastLevel::Error, "Failed to revoke public link.");
                    }
                }
            });
        }
    };

    let handle_copy = {
        let url = public_url.clone();
        move |_| {
            if let Some(ref url) = url {
                copy_to_clipboard(url);
                push_toast(&mut toasts, ToastLevel::Info, "Link copied to clipboard.");
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div {
                class: "dialog dialog-wide",
                h2 {
                    class: "dialog-title",
                    Icon { icon: FaUserGroup, width: 18, height: 18 }
                    "Share \"{note.title}\""
                }

                // Individual collaborators
                section {
                    class: "share-section",
                    h3 {
                        class: "share-section-title",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        "Share with users"
                    }

                    div {
                        class: "share-invite-row",
                        Input {
                            r#type: "email",
                            class: "w-full",
                            placeholder: "Enter an email address",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: sharing() || email().trim().is_empty(),
                            onclick: handle_share,
                            "Share"
                        }
                    }

                    if !collaborators.is_empty() {
                        h4 { class: "share-list-title", "Shared with:" }
                        ul {
                            class: "share-list",
                            for user in collaborators {
                                li {
                                    key: "{user.id}",
                                    class: "share-list-item",
                                    div {
                                        class: "share-list-user",
                                        p { class: "share-list-email", "{user.email}" }
                                        p {
                                            class: "share-list-meta",
                                            "Read-only · shared {date_part(&user.shared_at)}"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Revoke access",
                                        onclick: {
                                            let user_id = user.id.clone();
                                            let mut revoke = handle_revoke_share.clone();
                                            move |_| revoke(user_id.clone())
                                        },
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }

                // Public link
                section {
                    class: "share-section",
                    h3 {
                        class: "share-section-title",
                        Icon { icon: FaGlobe, width: 14, height: 14 }
                        "Public link"
                    }
                    p {
                        class: "share-section-hint",
                        "Create a public link so anyone with it can view this note."
                    }

                    if let Some(url) = public_url.clone() {
                        div {
                            class: "share-link-row",
                            Input {
                                class: "w-full",
                                readonly: true,
                                value: "{url}",
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                title: "Copy link",
                                onclick: handle_copy,
                                "Copy"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: handle_revoke_link,
                            Icon { icon: FaXmark, width: 14, height: 14 }
                            "Revoke public link"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: generating(),
                            onclick: handle_generate_link,
                            Icon { icon: FaLink, width: 14, height: 14 }
                            if generating() { "Generating..." } else { "Generate public link" }
                        }
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
