//! Notes view: session check, fetch, table, dialogs.
//!
//! On mount the view validates the stored token against the backend; an
//! invalid session replace-navigates to the auth screen before anything is
//! fetched. Every mutation goes through the API client and, on success,
//! restarts the loader so the table always renders what the backend last
//! said. In-flight work lives in component-scoped tasks, so navigating away
//! drops it instead of updating unmounted state.

use api::Note;
use dioxus::prelude::*;
use ui::{
    make_client, push_toast, use_toast, NoteDraft, NoteFormDialog, NotesTable, ShareDialog,
    ToastLevel, UserMenu,
};

use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Validating,
    Loaded,
    LoadError,
}

#[component]
pub fn Notes() -> Element {
    let nav = use_navigator();
    let mut toasts = use_toast();

    let mut notes = use_signal(Vec::<Note>::new);
    let mut state = use_signal(|| LoadState::Validating);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Note>::None);
    let mut share_note_id = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Validate the session, then fetch. Restarted after every mutation.
    let mut loader = use_resource(move || async move {
        let client = make_client();
        if !client.check_token().await {
            nav.replace(Route::Auth {});
            return;
        }
        match client.list_notes().await {
            Ok(items) => {
                notes.set(items);
                state.set(LoadState::Loaded);
            }
            Err(e) => {
                tracing::error!("fetching notes failed: {e}");
                state.set(LoadState::LoadError);
                push_toast(&mut toasts, ToastLevel::Error, "Failed to fetch notes.");
            }
        }
    });

    let handle_save = move |draft: NoteDraft| {
        let current = editing();
        spawn(async move {
            saving.set(true);
            let client = make_client();
            let result = match current {
                Some(note) => {
                    client
                        .update_note(&note.id, &draft.title, &draft.content, draft.tags)
                        .await
                }
                None => {
                    client
                        .create_note(&draft.title, &draft.content, draft.tags)
                        .await
                }
            };
            match result {
                Ok(_) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Note saved.");
                    show_form.set(false);
                    editing.set(None);
                    loader.restart();
                }
                Err(e) => {
                    // Dialog stays open; nothing was changed on the backend's side.
                    tracing::error!("saving note failed: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, "Failed to save the note.");
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |note: Note| {
        spawn(async move {
            match make_client().delete_note(&note.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Note deleted.");
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("deleting note failed: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, "Failed to delete the note.");
                }
            }
        });
    };

    // The share dialog renders against the freshest copy of its note, so a
    // refetch updates the collaborator list and link state in place.
    let share_note = share_note_id()
        .and_then(|id| notes().iter().find(|n| n.id == id).cloned());

    rsx! {
        div {
            class: "notes-page",
            header {
                class: "notes-header",
                div {
                    h2 { class: "notes-heading", "Welcome back!" }
                    p { class: "notes-subheading", "Here's the list of your notes." }
                }
                UserMenu {}
            }

            {match state() {
                LoadState::Validating => rsx! {
                    p { class: "notes-status", "Checking your session..." }
                },
                LoadState::LoadError => rsx! {
                    div {
                        class: "notes-status",
                        p { "Your notes could not be loaded." }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| {
                                state.set(LoadState::Validating);
                                loader.restart();
                            },
                            "Retry"
                        }
                    }
                },
                LoadState::Loaded => rsx! {
                    NotesTable {
                        notes: notes(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        on_edit: move |note: Note| {
                            editing.set(Some(note));
                            show_form.set(true);
                        },
                        on_share: move |note: Note| share_note_id.set(Some(note.id)),
                        on_delete: handle_delete,
                    }
                },
            }}

            if show_form() {
                NoteFormDialog {
                    key: "{editing().map(|n| n.id).unwrap_or_default()}",
                    note: editing(),
                    busy: saving(),
                    on_save: handle_save,
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if let Some(note) = share_note {
                ShareDialog {
                    note,
                    on_close: move |_| share_note_id.set(None),
                    on_changed: move |_| loader.restart(),
                }
            }
        }
    }
}
