use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::Property;
use crate::{error::Result, AppError, AppState};

/// Query parameters for moderation endpoints
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    /// Admin secret key for authentication
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct ModerationRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PendingResponse {
    pub count: usize,
    pub properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    pub message: String,
    pub property: Property,
}

/// Moderation endpoints stay locked unless ADMIN_KEY is configured and
/// the request echoes it back
fn authorize(state: &AppState, params: &AdminQuery) -> Result<()> {
    let admin_key = state.config.admin_key.as_ref().ok_or(AppError::Unauthorized)?;

    if params.key != *admin_key {
        tracing::warn!("Invalid admin key attempt");
        return Err(AppError::Unauthorized);
    }

    Ok(())
}

/// Moderation queue
///
/// GET /api/admin/pending?key=<admin_key>
pub async fn pending_properties(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
) -> Result<Json<PendingResponse>> {
    authorize(&state, &params)?;

    let properties = state.listings.pending().await;
    Ok(Json(PendingResponse {
        count: properties.len(),
        properties,
    }))
}

/// Approve a pending property, making it live immediately
///
/// POST /api/admin/approve?key=<admin_key>
pub async fn approve_property(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
    Json(payload): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>> {
    authorize(&state, &params)?;

    let property = state.listings.approve(&payload.id).await?;
    tracing::info!("Property approved: '{}' ({})", property.title, property.id);

    Ok(Json(ModerationResponse {
        message: "Property Approved and Live!".to_string(),
        property,
    }))
}

/// Reject a pending property, discarding it
///
/// POST /api/admin/reject?key=<admin_key>
pub async fn reject_property(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
    Json(payload): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>> {
    authorize(&state, &params)?;

    let property = state.listings.reject(&payload.id).await?;
    tracing::info!("Property rejected: '{}' ({})", property.title, property.id);

    Ok(Json(ModerationResponse {
        message: "Property Rejected.".to_string(),
        property,
    }))
}
