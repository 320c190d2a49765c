//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::make_client;

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod toast;
pub use toast::{push_toast, use_toast, Toast, ToastLevel, ToastProvider, Toasts};

mod modal;
pub use modal::ModalOverlay;

pub mod filters;
pub use filters::{collect_note_tags, filter_notes, sort_notes, CreatedSort, NoteFilter};

mod note_form;
pub use note_form::{NoteDraft, NoteFormDialog};

mod share_dialog;
pub use share_dialog::ShareDialog;

mod notes_table;
pub use notes_table::NotesTable;

mod user_menu;
pub use user_menu::UserMenu;
