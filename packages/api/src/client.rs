//! # ApiClient — outbound HTTP calls
//!
//! One client instance per app, holding the base URL, a shared
//! [`reqwest::Client`], and the [`SessionStore`] the bearer token lives in.
//! The session is passed in explicitly — nothing in this crate touches
//! browser storage on its own.
//!
//! Requests are plain, single-shot fetches: no retries, no timeouts, no
//! cancellation beyond the caller dropping the future. Protected calls fail
//! fast with [`ApiError::NoSession`] when no token is stored, mirroring the
//! backend's 401 without a round trip.

use serde::de::DeserializeOwned;
use store::{SessionStore, StorageBackend};

use crate::error::ApiError;
use crate::models::{Note, NotePayload, Page, PublicLink, RegisterData, ShareRequest, TokenData};

/// Fixed base URL of the backend API.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/api";

/// Typed client for the notes backend.
#[derive(Clone, Debug)]
pub struct ApiClient<B: StorageBackend> {
    base_url: String,
    http: reqwest::Client,
    session: SessionStore<B>,
}

impl<B: StorageBackend> ApiClient<B> {
    /// Client against [`DEFAULT_SERVER_URL`].
    pub fn new(session: SessionStore<B>) -> Self {
        Self::with_base_url(DEFAULT_SERVER_URL, session)
    }

    /// Client against a custom base URL (trailing slashes are trimmed).
    pub fn with_base_url(base_url: impl Into<String>, session: SessionStore<B>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    /// The session store this client reads the bearer token from.
    pub fn session(&self) -> &SessionStore<B> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.get_token().ok_or(ApiError::NoSession)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn status_only(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_status(status.as_u16()))
        }
    }

    /// `POST /auth/login`. On success the returned session fields are
    /// persisted before the payload is handed back.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenData, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let data: TokenData = Self::decode(response).await?;
        self.session.set_session(&data.to_session());
        Ok(data)
    }

    /// `POST /auth/register`. Does not log the user in.
    pub async fn register(&self, data: &RegisterData) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(data)
            .send()
            .await?;
        Self::status_only(&response)
    }

    /// `GET /auth/me` — is the stored token still valid?
    ///
    /// Never errors: no stored token and transport failures both answer
    /// `false`. A 401 additionally removes the stored token, so the next
    /// check short-circuits without a round trip.
    pub async fn check_token(&self) -> bool {
        let Some(token) = self.session.get_token() else {
            return false;
        };

        let result = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(&token)
            .send()
            .await;

        match result {
            Ok(response) => {
                if response.status() == reqwest::StatusCode::UNAUTHORIZED {
                    self.session.remove_token();
                    return false;
                }
                response.status().is_success()
            }
            Err(e) => {
                tracing::warn!("token check failed: {e}");
                false
            }
        }
    }

    /// `GET /notes/` — the caller's notes, in exactly the order the backend
    /// supplied.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .get(self.url("/notes/"))
            .bearer_auth(token)
            .send()
            .await?;
        let page: Page<Note> = Self::decode(response).await?;
        Ok(page.items)
    }

    /// `POST /notes/` — returns the persisted note with its backend-assigned id.
    pub async fn create_note(
        &self,
        title: &str,
        content: &str,
        tag_names: Vec<String>,
    ) -> Result<Note, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .post(self.url("/notes/"))
            .bearer_auth(token)
            .json(&NotePayload {
                title: title.to_string(),
                content: content.to_string(),
                tag_names,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /notes/{id}` — returns the updated note.
    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        tag_names: Vec<String>,
    ) -> Result<Note, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .put(self.url(&format!("/notes/{id}")))
            .bearer_auth(token)
            .json(&NotePayload {
                title: title.to_string(),
                content: content.to_string(),
                tag_names,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /notes/{id}`.
    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .delete(self.url(&format!("/notes/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::status_only(&response)
    }

    /// `POST /notes/share` — grant a user read access by email.
    pub async fn share_note(&self, note_id: &str, email: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .post(self.url("/notes/share"))
            .bearer_auth(token)
            .json(&ShareRequest {
                note_id: note_id.to_string(),
                shared_with_user_email: email.to_string(),
            })
            .send()
            .await?;
        Self::status_only(&response)
    }

    /// `DELETE /notes/{id}/share/{user_id}` — revoke a collaborator's access.
    pub async fn revoke_share(&self, note_id: &str, user_id: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .delete(self.url(&format!("/notes/{note_id}/share/{user_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::status_only(&response)
    }

    /// `POST /notes/{id}/public-link` — create (or re-issue) the note's
    /// public read-only link. Calling this again without revoking first is
    /// not an error; the backend returns the current link state.
    pub async fn generate_public_link(&self, note_id: &str) -> Result<PublicLink, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .post(self.url(&format!("/notes/{note_id}/public-link")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /notes/{id}/public-link` — revoke the public link. A later
    /// generate call yields a fresh link value.
    pub async fn revoke_public_link(&self, note_id: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .delete(self.url(&format!("/notes/{note_id}/public-link")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::status_only(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::session::{KEY_EMAIL, KEY_FULL_NAME};
    use store::{MemoryStore, Session};

    fn sample_session() -> Session {
        Session {
            token: "t1".to_string(),
            full_name: "A B".to_string(),
            email: "a@b.com".to_string(),
            user_id: "1".to_string(),
            token_type: "bearer".to_string(),
        }
    }

    fn client() -> ApiClient<MemoryStore> {
        ApiClient::new(SessionStore::new(MemoryStore::new()))
    }

    fn logged_in_client() -> ApiClient<MemoryStore> {
        let c = client();
        c.session().set_session(&sample_session());
        c
    }

    /// Accept one connection and answer it with an empty-bodied response.
    async fn serve_once(status_line: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response =
                format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            let _ = socket.write_all(response.as_bytes()).await;
        });
        addr
    }

    #[test]
    fn test_url_building() {
        let c = client();
        assert_eq!(c.url("/notes/"), "http://localhost:8000/api/notes/");

        let c = ApiClient::with_base_url(
            "https://notes.example/api/",
            SessionStore::new(MemoryStore::new()),
        );
        assert_eq!(c.url("/auth/me"), "https://notes.example/api/auth/me");
        assert_eq!(c.url("/notes/7"), "https://notes.example/api/notes/7");
    }

    #[test]
    fn test_bearer_requires_session() {
        let c = client();
        assert!(matches!(c.bearer(), Err(ApiError::NoSession)));

        let c = logged_in_client();
        assert_eq!(c.bearer().unwrap(), "t1");
    }

    #[tokio::test]
    async fn test_check_token_without_token_is_false() {
        // No token stored: answered locally, no request is issued.
        let c = client();
        assert!(!c.check_token().await);
    }

    #[tokio::test]
    async fn test_check_token_on_401_removes_token_and_keeps_profile() {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).set_session(&sample_session());

        let addr = serve_once("401 Unauthorized").await;
        let c = ApiClient::with_base_url(
            format!("http://{addr}"),
            SessionStore::new(backend.clone()),
        );

        assert!(!c.check_token().await);

        // Only the token is removed; the cached profile fields survive.
        assert!(c.session().get_token().is_none());
        assert_eq!(backend.get_item(KEY_EMAIL).as_deref(), Some("a@b.com"));
        assert_eq!(backend.get_item(KEY_FULL_NAME).as_deref(), Some("A B"));
    }

    #[tokio::test]
    async fn test_check_token_on_2xx_keeps_token() {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).set_session(&sample_session());

        let addr = serve_once("200 OK").await;
        let c = ApiClient::with_base_url(
            format!("http://{addr}"),
            SessionStore::new(backend.clone()),
        );

        assert!(c.check_token().await);
        assert_eq!(c.session().get_token().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_check_token_on_other_errors_keeps_token() {
        // A 500 means the backend is unhealthy, not that the session is bad.
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).set_session(&sample_session());

        let addr = serve_once("500 Internal Server Error").await;
        let c = ApiClient::with_base_url(
            format!("http://{addr}"),
            SessionStore::new(backend.clone()),
        );

        assert!(!c.check_token().await);
        assert_eq!(c.session().get_token().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_protected_calls_fail_fast_without_session() {
        let c = client();
        assert!(matches!(c.list_notes().await, Err(ApiError::NoSession)));
        assert!(matches!(c.delete_note("1").await, Err(ApiError::NoSession)));
        assert!(matches!(
            c.share_note("1", "a@b.com").await,
            Err(ApiError::NoSession)
        ));
    }
}
