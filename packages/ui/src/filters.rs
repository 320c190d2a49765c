//! Client-side filtering and sorting of the fetched note list.
//!
//! All of this is derived view state: recomputed from the note sequence on
//! every render, never persisted, and never sent to the backend. Without a
//! user-applied filter or sort, the backend's order is kept exactly.

use api::{Note, Visibility};

/// User-applied filter over the note table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteFilter {
    /// Case-insensitive substring match against the title.
    pub title: String,
    /// Exact tag match.
    pub tag: Option<String>,
    pub visibility: Option<Visibility>,
}

impl NoteFilter {
    /// Whether any criterion is set (controls the reset button).
    pub fn is_active(&self) -> bool {
        !self.title.trim().is_empty() || self.tag.is_some() || self.visibility.is_some()
    }

    pub fn matches(&self, note: &Note) -> bool {
        let needle = self.title.trim().to_lowercase();
        if !needle.is_empty() && !note.title.to_lowercase().contains(&needle) {
            return false;
        }
        if let Some(ref tag) = self.tag {
            if !note.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(visibility) = self.visibility {
            if note.visibility != visibility {
                return false;
            }
        }
        true
    }
}

/// Sort state of the "created" column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreatedSort {
    /// Backend order, untouched.
    #[default]
    Backend,
    NewestFirst,
    OldestFirst,
}

impl CreatedSort {
    /// Next state when the column header is clicked.
    pub fn toggle(self) -> Self {
        match self {
            CreatedSort::Backend => CreatedSort::NewestFirst,
            CreatedSort::NewestFirst => CreatedSort::OldestFirst,
            CreatedSort::OldestFirst => CreatedSort::Backend,
        }
    }

    /// Indicator glyph for the column header.
    pub fn indicator(self) -> &'static str {
        match self {
            CreatedSort::Backend => "",
            CreatedSort::NewestFirst => "▼",
            CreatedSort::OldestFirst => "▲",
        }
    }
}

/// Notes passing the filter, in their incoming order.
pub fn filter_notes(notes: &[Note], filter: &NoteFilter) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| filter.matches(note))
        .cloned()
        .collect()
}

/// Apply the created-date sort. RFC 3339 strings order lexicographically,
/// so no date parsing is needed; the sort is stable so equal timestamps
/// keep backend order.
pub fn sort_notes(mut notes: Vec<Note>, sort: CreatedSort) -> Vec<Note> {
    match sort {
        CreatedSort::Backend => {}
        CreatedSort::NewestFirst => {
            notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        CreatedSort::OldestFirst => {
            notes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
    }
    notes
}

/// Distinct tags across the fetched notes, sorted, for the tag filter menu.
pub fn collect_note_tags(notes: &[Note]) -> Vec<String> {
    let mut tags: Vec<String> = notes
        .iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, tags: &[&str], visibility: Visibility, created: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            created_at: created.to_string(),
            modified_at: created.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            visibility,
            shared_with: None,
            public_url: None,
        }
    }

    fn sample() -> Vec<Note> {
        vec![
            note("1", "Groceries", &["home"], Visibility::Private, "2024-03-01T00:00:00Z"),
            note("2", "Meeting notes", &["work"], Visibility::Shared, "2024-01-15T00:00:00Z"),
            note("3", "Grocery budget", &["home", "money"], Visibility::Public, "2024-02-20T00:00:00Z"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_backend_order() {
        let notes = sample();
        let filter = NoteFilter::default();
        assert!(!filter.is_active());

        let out = filter_notes(&notes, &filter);
        let ids: Vec<&str> = out.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_title_filter_is_case_insensitive_substring() {
        let notes = sample();
        let filter = NoteFilter {
            title: "groc".to_string(),
            ..Default::default()
        };
        let ids: Vec<String> = filter_notes(&notes, &filter).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_tag_and_visibility_filters() {
        let notes = sample();

        let by_tag = NoteFilter {
            tag: Some("home".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_notes(&notes, &by_tag).len(), 2);

        let combined = NoteFilter {
            tag: Some("home".to_string()),
            visibility: Some(Visibility::Public),
            ..Default::default()
        };
        let out = filter_notes(&notes, &combined);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
    }

    #[test]
    fn test_sort_by_created_date() {
        let notes = sample();

        let newest = sort_notes(notes.clone(), CreatedSort::NewestFirst);
        let ids: Vec<&str> = newest.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);

        let oldest = sort_notes(notes.clone(), CreatedSort::OldestFirst);
        let ids: Vec<&str> = oldest.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let backend = sort_notes(notes, CreatedSort::Backend);
        let ids: Vec<&str> = backend.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_cycles_through_states() {
        let s = CreatedSort::Backend;
        let s = s.toggle();
        assert_eq!(s, CreatedSort::NewestFirst);
        let s = s.toggle();
        assert_eq!(s, CreatedSort::OldestFirst);
        assert_eq!(s.toggle(), CreatedSort::Backend);
    }

    #[test]
    fn test_collect_note_tags_dedups_and_sorts() {
        let notes = sample();
        assert_eq!(collect_note_tags(&notes), vec!["home", "money", "work"]);
        assert!(collect_note_tags(&[]).is_empty());
    }
}
