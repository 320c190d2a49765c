//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::StorageBackend`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Everything else**: process-local memory via [`store::MemoryStore`]

use api::ApiClient;
use store::SessionStore;

/// Create a platform-appropriate client against the default server URL.
///
/// Cheap to call per use: the web backend is a zero-size handle onto
/// localStorage, so every client constructed this way sees the same session.
pub fn make_client() -> ApiClient<impl store::StorageBackend + Clone> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(SessionStore::new(store::LocalStore::new()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(SessionStore::new(store::MemoryStore::new()))
    }
}
