//! In-memory signup and session state.
//!
//! Signups park their form details under a one-time token until the OTP
//! step runs. Verified users get a session token that stays valid until
//! logout or process exit; there is no expiry.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{PendingSignup, Role, UserSession};
use crate::token;

/// Pending signups and live sessions, keyed by their tokens
#[derive(Default)]
pub struct SessionStore {
    pending: RwLock<HashMap<String, PendingSignup>>,
    sessions: RwLock<HashMap<String, UserSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park signup details and hand back the token the verify step
    /// must present
    pub async fn begin_signup(&self, signup: PendingSignup) -> String {
        let signup_token = token::fresh_id();
        self.pending
            .write()
            .await
            .insert(signup_token.clone(), signup);
        signup_token
    }

    /// Complete a signup. The token is single-use: it is consumed here
    /// whether or not a session was ever issued for it before.
    pub async fn verify_signup(&self, signup_token: &str) -> Result<(String, UserSession)> {
        let signup = self
            .pending
            .write()
            .await
            .remove(signup_token)
            .ok_or(AppError::SignupNotFound)?;

        Ok(self.start_session(UserSession::from_signup(signup)).await)
    }

    /// Sign in the canned returning-user profile under the given role
    pub async fn login(&self, role: Role) -> (String, UserSession) {
        self.start_session(UserSession::returning_user(role)).await
    }

    async fn start_session(&self, user: UserSession) -> (String, UserSession) {
        let session_token = token::fresh_id();
        self.sessions
            .write()
            .await
            .insert(session_token.clone(), user.clone());
        (session_token, user)
    }

    /// Look up a live session by bearer token
    pub async fn find(&self, session_token: &str) -> Option<UserSession> {
        self.sessions.read().await.get(session_token).cloned()
    }

    /// Drop a session. Returns whether one existed.
    pub async fn logout(&self, session_token: &str) -> bool {
        self.sessions.write().await.remove(session_token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(role: Role) -> PendingSignup {
        PendingSignup {
            name: "Asha Rao".to_string(),
            phone: "+91 90000 00001".to_string(),
            email: "asha@example.com".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_verify_issues_session_with_signup_details() {
        let store = SessionStore::new();
        let signup_token = store.begin_signup(signup(Role::Buyer)).await;

        let (session_token, user) = store.verify_signup(&signup_token).await.unwrap();
        assert_eq!(user.name, "Asha Rao");
        assert_eq!(user.role, Role::Buyer);

        let found = store.find(&session_token).await.unwrap();
        assert_eq!(found.email, "asha@example.com");
    }

    #[tokio::test]
    async fn test_signup_token_is_single_use() {
        let store = SessionStore::new();
        let signup_token = store.begin_signup(signup(Role::Seller)).await;

        store.verify_signup(&signup_token).await.unwrap();
        assert!(matches!(
            store.verify_signup(&signup_token).await,
            Err(AppError::SignupNotFound)
        ));
    }

    #[tokio::test]
    async fn test_unknown_signup_token_rejected() {
        let store = SessionStore::new();
        assert!(matches!(
            store.verify_signup("no-such-token").await,
            Err(AppError::SignupNotFound)
        ));
    }

    #[tokio::test]
    async fn test_login_signs_in_canned_profile() {
        let store = SessionStore::new();
        let (session_token, user) = store.login(Role::Seller).await;

        assert_eq!(user.name, "Returning User");
        assert_eq!(user.role, Role::Seller);
        assert!(store.find(&session_token).await.is_some());
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let store = SessionStore::new();
        let (session_token, _) = store.login(Role::Buyer).await;

        assert!(store.logout(&session_token).await);
        assert!(store.find(&session_token).await.is_none());

        // Second logout of the same token is a no-op
        assert!(!store.logout(&session_token).await);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let (buyer_token, _) = store.login(Role::Buyer).await;
        let (seller_token, _) = store.login(Role::Seller).await;

        store.logout(&buyer_token).await;
        assert!(store.find(&seller_token).await.is_some());
    }
}
