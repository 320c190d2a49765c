//! Create/edit note dialog.
//!
//! A pure request/response form: collect the fields, hand the draft upward
//! once per submit, no debouncing and no draft autosave. The parent owns the
//! API call and decides whether the dialog closes or stays open.

use api::{Note, Visibility};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::ModalOverlay;

/// What the form collects. Ids and timestamps are backend-assigned and never
/// appear here.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
}

/// Comma-separated tag input, trimmed, empties dropped.
pub(crate) fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Modal form for creating a new note or editing an existing one.
/// `note` selects the mode; edit mode pre-fills every field.
#[component]
pub fn NoteFormDialog(
    note: Option<Note>,
    #[props(default = false)] busy: bool,
    on_save: EventHandler<NoteDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = note.is_some();

    let mut title = use_signal({
        let initial = note.as_ref().map(|n| n.title.clone()).unwrap_or_default();
        move || initial
    });
    let mut content = use_signal({
        let initial = note.as_ref().map(|n| n.content.clone()).unwrap_or_default();
        move || initial
    });
    let mut tags = use_signal({
        let initial = note.as_ref().map(|n| n.tags.join(", ")).unwrap_or_default();
        move || initial
    });
    let mut visibility = use_signal({
        let initial = note.as_ref().map(|n| n.visibility).unwrap_or_default();
        move || initial
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() {
            return;
        }
        on_save.call(NoteDraft {
            title: title().trim().to_string(),
            content: content(),
            tags: parse_tags(&tags()),
            visibility: visibility(),
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            div {
                class: "dialog",
                h2 {
                    class: "dialog-title",
                    if editing { "Edit Note" } else { "Create New Note" }
                }
                p {
                    class: "dialog-subtitle",
                    if editing {
                        "Update your note details below."
                    } else {
                        "Fill in the details to create a new note."
                    }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "note-title", "Title" }
                        Input {
                            id: "note-title",
                            class: "w-full",
                            placeholder: "Enter note title...",
                            required: true,
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "note-content", "Content" }
                        Textarea {
                            id: "note-content",
                            class: "w-full",
                            placeholder: "Write your note content here...",
                            value: content(),
                            oninput: move |evt: FormEvent| content.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "note-tags", "Tags" }
                        Input {
                            id: "note-tags",
                            class: "w-full",
                            placeholder: "tag1, tag2, tag3...",
                            value: tags(),
                            oninput: move |evt: FormEvent| tags.set(evt.value()),
                        }
                        p { class: "field-hint", "Separate tags with commas" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "note-visibility", "Visibility" }
                        select {
                            id: "note-visibility",
                            class: "select w-full",
                            value: visibility().as_str(),
                            onchange: move |evt| {
                                if let Some(v) = Visibility::parse(&evt.value()) {
                                    visibility.set(v);
                                }
                            },
                            for v in Visibility::ALL {
                                option {
                                    key: "{v.as_str()}",
                                    value: v.as_str(),
                                    selected: visibility() == v,
                                    "{v.label()}"
                                }
                            }
                        }
                    }

                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: busy,
                            if editing { "Update Note" } else { "Create Note" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags("solo"), vec!["solo"]);
    }
}
