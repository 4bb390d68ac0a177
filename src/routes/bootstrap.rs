use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Settings a browser client needs before anything renders
#[derive(Debug, Serialize)]
pub struct ClientConfigResponse {
    #[serde(rename = "authPublishableKey")]
    pub auth_publishable_key: String,
    pub environment: String,
}

/// Client bootstrap configuration
///
/// Publishable keys only; the moderation key and server-side secrets
/// never leave the process.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse {
        auth_publishable_key: state.config.auth_publishable_key.clone(),
        environment: state.config.environment.clone(),
    })
}
