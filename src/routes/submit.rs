use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Property, Role, SubmitPropertyRequest};
use crate::routes::session::require_role;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitPropertyResponse {
    pub message: String,
    pub status: &'static str,
    pub property: Property,
}

/// Submit a property for listing
///
/// Sellers only. The listing is derived from the form (headline,
/// bathrooms, stock photo, amenity defaults) and queued for moderation;
/// nothing goes live without an approval. Owner contact details and the
/// free-text description are logged for the consultation call rather
/// than stored.
pub async fn submit_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitPropertyRequest>,
) -> Result<Json<SubmitPropertyResponse>> {
    // 1. Only sellers list properties
    require_role(&state, &headers, Role::Seller).await?;

    // 2. Derive the listing and queue it for moderation
    let property = Property::from_submission(&payload)?;
    let property = state.listings.submit(property).await;

    // 3. Leave the consultation trail in the logs
    tracing::info!(
        "Property submitted for moderation: '{}' ({}), owner {} ({} / {})",
        property.title,
        property.id,
        payload.owner_name,
        payload.owner_phone,
        payload.owner_email
    );
    if let Some(description) = &payload.description {
        tracing::debug!("Submission described as: {}", description);
    }

    Ok(Json(SubmitPropertyResponse {
        message: "Property submitted successfully! We will contact you for the consultation call shortly."
            .to_string(),
        status: "pending",
        property,
    }))
}
