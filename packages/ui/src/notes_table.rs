//! Sortable, filterable table over the fetched notes.
//!
//! Filter and sort are derived view state owned by this component and
//! recomputed on every render from the note sequence the owner passes in;
//! nothing here survives a refetch or is sent to the backend.

use api::{Note, Visibility};
use dioxus::prelude::*;

use crate::components::{Badge, Button, ButtonVariant, Input};
use crate::filters::{collect_note_tags, filter_notes, sort_notes, CreatedSort, NoteFilter};
use crate::icons::{FaGlobe, FaLock, FaPen, FaTrashCan, FaUserGroup, FaXmark};
use crate::Icon;

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[component]
fn VisibilityCell(visibility: Visibility) -> Element {
    rsx! {
        span {
            class: "visibility-cell",
            {match visibility {
                Visibility::Private => rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                Visibility::Shared => rsx! { Icon { icon: FaUserGroup, width: 14, height: 14 } },
                Visibility::Public => rsx! { Icon { icon: FaGlobe, width: 14, height: 14 } },
            }}
            "{visibility.label()}"
        }
    }
}

#[component]
pub fn NotesTable(
    notes: Vec<Note>,
    on_add: EventHandler<()>,
    on_edit: EventHandler<Note>,
    on_share: EventHandler<Note>,
    on_delete: EventHandler<Note>,
) -> Element {
    let mut filter = use_signal(NoteFilter::default);
    let mut sort = use_signal(CreatedSort::default);

    let tags = collect_note_tags(&notes);
    let visible = sort_notes(filter_notes(&notes, &filter()), sort());

    rsx! {
        div {
            class: "notes-toolbar",
            div {
                class: "notes-toolbar-filters",
                Input {
                    class: "filter-title",
                    placeholder: "Filter notes...",
                    value: filter().title.clone(),
                    oninput: move |evt: FormEvent| filter.write().title = evt.value(),
                }
                select {
                    class: "select",
                    value: filter().tag.clone().unwrap_or_default(),
                    onchange: move |evt| {
                        let value = evt.value();
                        filter.write().tag = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "All tags" }
                    for tag in &tags {
                        option { key: "{tag}", value: "{tag}", "{tag}" }
                    }
                }
                select {
                    class: "select",
                    value: filter().visibility.map(|v| v.as_str()).unwrap_or(""),
                    onchange: move |evt| {
                        filter.write().visibility = Visibility::parse(&evt.value());
                    },
                    option { value: "", "All visibilities" }
                    for v in Visibility::ALL {
                        option { key: "{v.as_str()}", value: v.as_str(), "{v.label()}" }
                    }
                }
                if filter().is_active() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| filter.set(NoteFilter::default()),
                        "Reset"
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_add.call(()),
                "Add Note"
            }
        }

        table {
            class: "notes-table",
            thead {
                tr {
                    th { "Note" }
                    th { "Title" }
                    th { "Visibility" }
                    th {
                        class: "sortable",
                        onclick: move |_| {
                            let next = sort().toggle();
                            sort.set(next);
                        },
                        "Created {sort().indicator()}"
                    }
                    th { "" }
                }
            }
            tbody {
                if visible.is_empty() {
                    tr {
                        td {
                            class: "notes-empty",
                            colspan: "5",
                            "No notes."
                        }
                    }
                }
                for note in visible {
                    tr {
                        key: "{note.id}",
                        td { class: "cell-id", "{note.id}" }
                        td {
                            class: "cell-title",
                            if let Some(first_tag) = note.tags.first() {
                                Badge { "{first_tag}" }
                            }
                            span { class: "cell-title-text", "{note.title}" }
                        }
                        td { VisibilityCell { visibility: note.visibility } }
                        td {
                            class: "cell-created",
                            if note.created_at.is_empty() {
                                "-"
                            } else {
                                "{date_part(&note.created_at)}"
                            }
                        }
                        td {
                            class: "cell-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Edit",
                                onclick: {
                                    let note = note.clone();
                                    move |_| on_edit.call(note.clone())
                                },
                                Icon { icon: FaPen, width: 14, height: 14 }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Share",
                                onclick: {
                                    let note = note.clone();
                                    move |_| on_share.call(note.clone())
                                },
                                Icon { icon: FaUserGroup, width: 14, height: 14 }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Delete",
                                onclick: {
                                    let note = note.clone();
                                    move |_| on_delete.call(note.clone())
                                },
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                            }
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
    fn test_date_part() {
        assert_eq!(date_part("2024-03-01T12:00:00Z"), "2024-03-01");
        assert_eq!(date_part("2024-03-01"), "2024-03-01");
        assert_eq!(date_part(""), "");
    }
}
