//! Session context for the UI.
//!
//! The stored session is browser-wide state; components never touch storage
//! directly. [`SessionProvider`] reads it once at startup, asks the backend
//! whether the cached token is still good, and exposes the result as a
//! context signal. The auth/logout flows write back through the same signal
//! so every consumer re-renders with the new identity.

use dioxus::prelude::*;
use store::Session;

use crate::make_client;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The confirmed session. `None` while loading, after logout, or when
    /// the backend rejected the cached token.
    pub session: Option<Session>,
    /// Whether the mount-time validation is still in flight.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the router with this component so every view can reach the session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session_state = use_signal(SessionState::default);

    use_context_provider(|| session_state);

    // Validate the cached session on mount. One state update either way;
    // a rejected token has already been removed from storage by the check.
    let _ = use_resource(move || async move {
        let client = make_client();
        let session = if client.check_token().await {
            client.session().get_session()
        } else {
            None
        };
        session_state.set(SessionState {
            session,
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading_and_logged_out() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_settled_state_with_session_is_logged_in() {
        let state = SessionState {
            session: Some(Session {
                token: "t1".to_string(),
                full_name: "A B".to_string(),
                email: "a@b.com".to_string(),
                user_id: "1".to_string(),
                token_type: "bearer".to_string(),
            }),
            loading: false,
        };
        assert!(state.is_logged_in());
    }
}
