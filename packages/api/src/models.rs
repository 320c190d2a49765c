//! # Wire models
//!
//! Typed shapes for everything the backend sends or accepts. The canonical
//! field naming is snake_case; the camelCase spellings that older backend
//! revisions emitted (`createdAt`, `sharedWith`, `publicUrl`, ...) are
//! accepted as serde aliases and treated as migration debt, never produced.
//!
//! Identifiers are carried as strings on the client. The backend has emitted
//! both JSON numbers and strings for ids across revisions, so id fields
//! deserialize from either encoding.
//!
//! Timestamps are RFC 3339 strings carried opaquely — the client never does
//! date arithmetic, it only orders by them (lexicographic order matches
//! chronological order for a single backend's uniform format).

use serde::{Deserialize, Deserializer, Serialize};

/// Accept a JSON string or number and normalize to `String`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

/// Session payload returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub access_token: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    pub token_type: String,
}

impl TokenData {
    /// Project into the session the store persists.
    pub fn to_session(&self) -> store::Session {
        store::Session {
            token: self.access_token.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            user_id: self.user_id.clone(),
            token_type: self.token_type.clone(),
        }
    }
}

/// Who a note is visible to. Closed variant so match sites stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Shared,
    Public,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Visibility::Private, Visibility::Shared, Visibility::Public];

    /// Human-readable label for table cells and select options.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Shared => "Shared",
            Visibility::Public => "Public",
        }
    }

    /// The wire value (`"private"` / `"shared"` / `"public"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Shared => "shared",
            Visibility::Public => "public",
        }
    }

    /// Parse a wire value. Unknown strings are rejected, not defaulted.
    pub fn parse(value: &str) -> Option<Visibility> {
        match value {
            "private" => Some(Visibility::Private),
            "shared" => Some(Visibility::Shared),
            "public" => Some(Visibility::Public),
            _ => None,
        }
    }
}

/// A user a note has been shared with. Exists only inside a note's sharing
/// state; the backend grants read-only access to shared users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub email: String,
    #[serde(default = "default_permission")]
    pub permission: String,
    #[serde(default, alias = "sharedAt")]
    pub shared_at: String,
}

fn default_permission() -> String {
    "read".to_string()
}

/// A note as the backend returns it. The client holds a transient, possibly
/// stale copy fetched per page load; ids are assigned by the backend only.
///
/// `visibility`, `shared_with` and `public_url` are mutually informative but
/// not coupled here — whether `public` implies a link is backend-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "updated_at", alias = "modifiedAt")]
    pub modified_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, alias = "sharedWith")]
    pub shared_with: Option<Vec<SharedUser>>,
    #[serde(default, alias = "publicUrl")]
    pub public_url: Option<String>,
}

impl Note {
    /// Collaborators list, empty when the backend omitted the field.
    pub fn collaborators(&self) -> &[SharedUser] {
        self.shared_with.as_deref().unwrap_or_default()
    }

    /// Whether a public link is currently active on this note.
    pub fn has_public_link(&self) -> bool {
        self.public_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Paged envelope around `GET /notes/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub pages: u64,
}

/// Body of `POST /auth/register`. Registration never logs the user in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of note create/update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub tag_names: Vec<String>,
}

/// Body of `POST /notes/share`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub note_id: String,
    pub shared_with_user_email: String,
}

/// Public link state returned when generating a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicLink {
    #[serde(alias = "publicUrl")]
    pub public_url: String,
    #[serde(default)]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_data_with_numeric_user_id() {
        // The exact login payload shape the backend returns.
        let json = r#"{
            "access_token": "t1",
            "full_name": "A B",
            "email": "a@b.com",
            "user_id": 1,
            "token_type": "bearer"
        }"#;
        let data: TokenData = serde_json::from_str(json).unwrap();
        assert_eq!(data.access_token, "t1");
        assert_eq!(data.user_id, "1");

        let session = data.to_session();
        assert_eq!(session.token, "t1");
        assert_eq!(session.full_name, "A B");
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn test_token_data_minimal_payload() {
        // Older backend revisions returned only token + type.
        let json = r#"{"access_token": "t2", "token_type": "bearer"}"#;
        let data: TokenData = serde_json::from_str(json).unwrap();
        assert_eq!(data.access_token, "t2");
        assert_eq!(data.full_name, "");
        assert_eq!(data.user_id, "");
    }

    #[test]
    fn test_note_canonical_shape() {
        let json = r#"{
            "id": 7,
            "title": "Groceries",
            "content": "milk",
            "created_at": "2024-01-02T03:04:05Z",
            "updated_at": "2024-01-03T03:04:05Z",
            "tags": ["home", "food"],
            "visibility": "private"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "7");
        assert_eq!(note.tags, vec!["home", "food"]);
        assert_eq!(note.visibility, Visibility::Private);
        assert_eq!(note.modified_at, "2024-01-03T03:04:05Z");
        assert!(note.collaborators().is_empty());
        assert!(!note.has_public_link());
    }

    #[test]
    fn test_note_legacy_camel_case_shape() {
        let json = r#"{
            "id": "abc",
            "title": "Shared one",
            "content": "",
            "createdAt": "2024-02-01T00:00:00Z",
            "modifiedAt": "2024-02-02T00:00:00Z",
            "tags": [],
            "visibility": "shared",
            "sharedWith": [
                {"id": 3, "email": "c@d.com", "sharedAt": "2024-02-03T00:00:00Z"}
            ],
            "publicUrl": "https://notes.example/p/xyz"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.created_at, "2024-02-01T00:00:00Z");
        assert_eq!(note.modified_at, "2024-02-02T00:00:00Z");
        assert_eq!(note.visibility, Visibility::Shared);
        assert!(note.has_public_link());

        let shared = note.collaborators();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].id, "3");
        // Permission defaults to read-only when the backend omits it.
        assert_eq!(shared[0].permission, "read");
        assert_eq!(shared[0].shared_at, "2024-02-03T00:00:00Z");
    }

    #[test]
    fn test_visibility_is_closed() {
        assert!(serde_json::from_str::<Visibility>("\"public\"").is_ok());
        assert!(serde_json::from_str::<Visibility>("\"internal\"").is_err());

        assert_eq!(Visibility::parse("shared"), Some(Visibility::Shared));
        assert_eq!(Visibility::parse("SHARED"), None);
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Public.label(), "Public");
    }

    #[test]
    fn test_page_envelope_preserves_order() {
        let json = r#"{
            "items": [
                {"id": 2, "title": "b", "visibility": "private"},
                {"id": 1, "title": "a", "visibility": "private"}
            ],
            "total": 2, "page": 1, "size": 50, "pages": 1
        }"#;
        let page: Page<Note> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
        // Backend order is kept exactly; the client never reorders on fetch.
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_note_payload_wire_shape() {
        let payload = NotePayload {
            title: "t".into(),
            content: "c".into(),
            tag_names: vec!["x".into()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "t", "content": "c", "tag_names": ["x"]})
        );
    }
}
