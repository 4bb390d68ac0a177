use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct BuyersDebugResponse {
    pub count: usize,
    pub buyers: Vec<Value>,
}

/// Dump the hosted buyers table
///
/// Connectivity check for the hosted table wiring, kept off the /api
/// prefix. Rows pass through untyped since the table schema is owned
/// by the hosted side.
pub async fn list_buyers(State(state): State<AppState>) -> Result<Json<BuyersDebugResponse>> {
    let buyers = state.hosted.list_buyers().await?;
    tracing::debug!("Fetched {} buyer rows", buyers.len());

    Ok(Json(BuyersDebugResponse {
        count: buyers.len(),
        buyers,
    }))
}
