use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// All listing and session state is process-local, so there is nothing
/// to probe beyond the process itself. Used by load balancers and
/// monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
