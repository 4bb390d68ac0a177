//! FlatConnectio Lead-Capture Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod hosted;
pub mod models;
pub mod routes;
pub mod sessions;
pub mod store;
pub mod token;

pub use config::Config;
pub use error::{AppError, Result};
pub use hosted::{HostedTableClient, LeadTable};
pub use sessions::SessionStore;
pub use store::ListingStore;

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub listings: Arc<ListingStore>,
    pub sessions: Arc<SessionStore>,
    pub hosted: HostedTableClient,
}

impl AppState {
    /// Create a new AppState with an empty board and no sessions
    pub fn new(config: Config, hosted: HostedTableClient) -> Self {
        Self {
            config,
            listings: Arc::new(ListingStore::new()),
            sessions: Arc::new(SessionStore::new()),
            hosted,
        }
    }
}
