//! # Session persistence
//!
//! The client keeps exactly one session per browser profile: a bearer token
//! plus the profile fields returned by the login endpoint. Everything lives
//! under a fixed set of storage keys so that logout can clear them wholesale.
//!
//! [`StorageBackend`] is the seam between the session logic and the actual
//! storage: [`crate::LocalStore`] persists into `window.localStorage` on the
//! web platform, [`crate::MemoryStore`] backs tests and non-wasm builds. The
//! trait mirrors the browser `Storage` API shape and is fully synchronous —
//! there is no contention to manage under the single-tab assumption.
//!
//! No expiry is tracked here. Whether the token is still valid is only ever
//! decided by asking the backend (`GET /auth/me`).

use serde::{Deserialize, Serialize};

/// Storage key for the bearer token.
pub const KEY_TOKEN: &str = "access_token";
/// Storage key for the user's full name.
pub const KEY_FULL_NAME: &str = "full_name";
/// Storage key for the user's email.
pub const KEY_EMAIL: &str = "email";
/// Storage key for the user's id.
pub const KEY_USER_ID: &str = "user_id";
/// Storage key for the token type (`"bearer"`).
pub const KEY_TOKEN_TYPE: &str = "token_type";

/// A logged-in session: the bearer token and cached profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub full_name: String,
    pub email: String,
    pub user_id: String,
    pub token_type: String,
}

impl Session {
    /// Initials derived from the full name, for the avatar fallback.
    /// Empty or whitespace-only names yield an empty string.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Key-value storage seam, shaped like the browser `Storage` API.
///
/// Implementations swallow storage-layer failures: an unavailable or
/// corrupted store degrades to "no session", never to a crash.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
    fn clear(&self);
}

/// Session store over a [`StorageBackend`].
///
/// This is the one place that knows the storage key layout; the rest of the
/// client reads and writes sessions only through it.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist the token and profile fields.
    pub fn set_session(&self, session: &Session) {
        self.backend.set_item(KEY_TOKEN, &session.token);
        self.backend.set_item(KEY_FULL_NAME, &session.full_name);
        self.backend.set_item(KEY_EMAIL, &session.email);
        self.backend.set_item(KEY_USER_ID, &session.user_id);
        self.backend.set_item(KEY_TOKEN_TYPE, &session.token_type);
    }

    /// The stored bearer token, or `None` when logged out.
    pub fn get_token(&self) -> Option<String> {
        self.backend.get_item(KEY_TOKEN)
    }

    /// The full stored session. `None` unless a token is present; profile
    /// fields missing from storage come back as empty strings.
    pub fn get_session(&self) -> Option<Session> {
        let token = self.backend.get_item(KEY_TOKEN)?;
        let field = |key| self.backend.get_item(key).unwrap_or_default();
        Some(Session {
            token,
            full_name: field(KEY_FULL_NAME),
            email: field(KEY_EMAIL),
            user_id: field(KEY_USER_ID),
            token_type: field(KEY_TOKEN_TYPE),
        })
    }

    /// Remove only the token, leaving profile fields in place.
    ///
    /// This is the 401 side effect of the token check; a later login
    /// overwrites the stale profile fields anyway.
    pub fn remove_token(&self) {
        self.backend.remove_item(KEY_TOKEN);
    }

    /// Remove every stored field. Used on logout.
    pub fn clear_session(&self) {
        self.backend.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn sample() -> Session {
        Session {
            token: "t1".to_string(),
            full_name: "A B".to_string(),
            email: "a@b.com".to_string(),
            user_id: "1".to_string(),
            token_type: "bearer".to_string(),
        }
    }

    #[test]
    fn test_session_roundtrip() {
        let store = SessionStore::new(MemoryStore::new());

        assert!(store.get_token().is_none());
        assert!(store.get_session().is_none());

        store.set_session(&sample());

        assert_eq!(store.get_token().as_deref(), Some("t1"));
        assert_eq!(store.get_session(), Some(sample()));
    }

    #[test]
    fn test_remove_token_keeps_profile_fields() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.set_session(&sample());

        store.remove_token();

        // No token means no session, even though profile fields remain.
        assert!(store.get_token().is_none());
        assert!(store.get_session().is_none());
        assert_eq!(backend.get_item(KEY_EMAIL).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_clear_session_removes_everything() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.set_session(&sample());

        store.clear_session();

        assert!(backend.get_item(KEY_TOKEN).is_none());
        assert!(backend.get_item(KEY_FULL_NAME).is_none());
        assert!(backend.get_item(KEY_EMAIL).is_none());
        assert!(backend.get_item(KEY_USER_ID).is_none());
        assert!(backend.get_item(KEY_TOKEN_TYPE).is_none());
    }

    #[test]
    fn test_partial_storage_defaults_to_empty_fields() {
        let backend = MemoryStore::new();
        backend.set_item(KEY_TOKEN, "t2");
        let store = SessionStore::new(backend);

        let session = store.get_session().unwrap();
        assert_eq!(session.token, "t2");
        assert_eq!(session.full_name, "");
        assert_eq!(session.email, "");
    }

    #[test]
    fn test_initials() {
        let mut s = sample();
        assert_eq!(s.initials(), "AB");

        s.full_name = "ada lovelace".to_string();
        assert_eq!(s.initials(), "AL");

        s.full_name = "  ".to_string();
        assert_eq!(s.initials(), "");
    }
}
