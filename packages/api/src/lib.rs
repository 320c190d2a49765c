//! # API crate — typed REST client for the notes backend
//!
//! Every outbound HTTP call the frontends make goes through this crate. The
//! backend owns all business logic (persistence, authorization, token
//! issuance, share-link generation); this client only shapes requests,
//! attaches the bearer token, and decodes responses into typed models.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — login/register/token check, note CRUD, sharing, public links |
//! | [`error`] | [`ApiError`] — network / auth / status / decode taxonomy |
//! | [`models`] | Wire shapes: [`Note`], [`Visibility`], [`SharedUser`], [`TokenData`], [`Page`] |
//!
//! ## Failure policy
//!
//! No retries, no timeouts, no offline queueing. Any non-2xx response or
//! transport failure surfaces as a single [`ApiError`] the caller reports
//! once and moves on from. The one special case is the token check: a 401
//! there removes the stored token as a side effect, and the check itself
//! never errors — it answers `true` or `false`.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, DEFAULT_SERVER_URL};
pub use error::ApiError;
pub use models::{
    Note, Page, PublicLink, RegisterData, SharedUser, TokenData, Visibility,
};
