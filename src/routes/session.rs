//! Session extraction helpers shared across route handlers.
//!
//! Sessions travel as bearer tokens. Role gating happens per handler
//! because most pages stay open to logged-out visitors.

use axum::http::{header, HeaderMap};

use crate::error::{AppError, Result};
use crate::models::{Role, UserSession};
use crate::AppState;

/// Extract the bearer token from the Authorization header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the request's session when a valid token is presented
pub async fn optional_session(state: &AppState, headers: &HeaderMap) -> Option<UserSession> {
    let token = bearer_token(headers)?;
    state.sessions.find(token).await
}

/// Require a logged-in session
pub async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<UserSession> {
    optional_session(state, headers)
        .await
        .ok_or(AppError::LoginRequired)
}

/// Require a logged-in session holding the given role
pub async fn require_role(
    state: &AppState,
    headers: &HeaderMap,
    required: Role,
) -> Result<UserSession> {
    let session = require_session(state, headers).await?;
    if session.role != required {
        tracing::info!(
            "Role-gated action refused: needs {}, session is {}",
            required,
            session.role
        );
        return Err(AppError::WrongRole {
            required,
            actual: session.role,
        });
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_missing_or_malformed_header_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc123"));
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
