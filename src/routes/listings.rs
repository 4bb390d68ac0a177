use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{brokerage_for_rent, format_inr, ListingFilter, Property, Role};
use crate::routes::session::{optional_session, require_role};
use crate::AppState;

/// A listing as browsers see it: stored fields plus the brokerage
/// quote derived from rent
#[derive(Debug, Serialize)]
pub struct ListingView {
    #[serde(flatten)]
    pub property: Property,
    pub brokerage: i64,
    #[serde(rename = "brokerageDisplay")]
    pub brokerage_display: String,
    #[serde(rename = "rentDisplay")]
    pub rent_display: String,
}

impl ListingView {
    pub fn from_property(property: Property) -> Self {
        let brokerage = brokerage_for_rent(property.rent);
        Self {
            brokerage,
            brokerage_display: format_inr(brokerage),
            rent_display: format_inr(property.rent),
            property,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub count: usize,
    pub listings: Vec<ListingView>,
}

#[derive(Debug, Deserialize)]
pub struct InquiryRequest {
    /// Optional note passed along to the consultation call
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub success: bool,
    pub message: String,
    pub brokerage: i64,
    #[serde(rename = "brokerageDisplay")]
    pub brokerage_display: String,
}

#[derive(Debug, Serialize)]
pub struct ListingDetailResponse {
    #[serde(flatten)]
    pub listing: ListingView,
    pub description: String,
}

/// Browse live listings
///
/// Open to visitors and buyers alike; a seller session is refused and
/// pointed at the listing flow instead. City matches exactly, BHK
/// matches the exact count, and either criterion is skipped with `All`.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
    headers: HeaderMap,
) -> Result<Json<ListingsResponse>> {
    if let Some(session) = optional_session(&state, &headers).await {
        if session.role == Role::Seller {
            return Err(AppError::SellersDoNotBrowse);
        }
    }

    let listings: Vec<ListingView> = state
        .listings
        .active(&filter)
        .await
        .into_iter()
        .map(ListingView::from_property)
        .collect();

    tracing::debug!(
        "Browse returned {} listings (city={}, bhk={})",
        listings.len(),
        filter.city,
        filter.bhk
    );

    Ok(Json(ListingsResponse {
        count: listings.len(),
        listings,
    }))
}

/// Home-page strip: the first three live listings
pub async fn featured_listings(State(state): State<AppState>) -> Json<ListingsResponse> {
    let listings: Vec<ListingView> = state
        .listings
        .featured()
        .await
        .into_iter()
        .map(ListingView::from_property)
        .collect();

    Json(ListingsResponse {
        count: listings.len(),
        listings,
    })
}

/// Listing detail payload, including the generated pitch paragraph
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingDetailResponse>> {
    let property = state
        .listings
        .find_active(&id)
        .await
        .ok_or(AppError::PropertyNotFound)?;

    let description = property.description();
    Ok(Json(ListingDetailResponse {
        listing: ListingView::from_property(property),
        description,
    }))
}

/// Request a callback about a listing
///
/// Buyers only. Nothing is stored; the inquiry goes to the logs where
/// the call team picks it up.
pub async fn request_callback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>> {
    // 1. Only buyers book consultation calls
    let user = require_role(&state, &headers, Role::Buyer).await?;

    // 2. The listing must be live
    let property = state
        .listings
        .find_active(&id)
        .await
        .ok_or(AppError::PropertyNotFound)?;

    // 3. Log the inquiry for the call team
    match &payload.message {
        Some(note) => tracing::info!(
            "Inquiry from {} ({}) for '{}': {}",
            user.name,
            user.phone,
            property.title,
            note
        ),
        None => tracing::info!(
            "Inquiry from {} ({}) for '{}'",
            user.name,
            user.phone,
            property.title
        ),
    }

    let brokerage = brokerage_for_rent(property.rent);
    Ok(Json(InquiryResponse {
        success: true,
        message: format!(
            "We will call you shortly to discuss your requirements for {}.",
            property.title
        ),
        brokerage,
        brokerage_display: format_inr(brokerage),
    }))
}
