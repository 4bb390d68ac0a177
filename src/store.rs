//! In-memory listing board.
//!
//! Two ordered lists: pending submissions awaiting moderation and the
//! live listings visitors browse. Approval moves a listing from one to
//! the other, rejection discards it. Order is insertion order; the
//! featured strip is simply the head of the live list.

use tokio::sync::RwLock;

use crate::constants::FEATURED_LISTING_COUNT;
use crate::error::{AppError, Result};
use crate::models::{ListingFilter, Property};

#[derive(Default)]
struct Board {
    pending: Vec<Property>,
    active: Vec<Property>,
}

/// Process-local listing state behind a read/write lock
#[derive(Default)]
pub struct ListingStore {
    board: RwLock<Board>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a freshly submitted listing for moderation
    pub async fn submit(&self, property: Property) -> Property {
        let mut board = self.board.write().await;
        board.pending.push(property.clone());
        property
    }

    /// All listings awaiting moderation, oldest first
    pub async fn pending(&self) -> Vec<Property> {
        self.board.read().await.pending.clone()
    }

    /// Move a pending listing to the live board
    pub async fn approve(&self, id: &str) -> Result<Property> {
        let mut board = self.board.write().await;
        let position = board
            .pending
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PropertyNotFound)?;

        let property = board.pending.remove(position);
        board.active.push(property.clone());
        Ok(property)
    }

    /// Drop a pending listing without publishing it
    pub async fn reject(&self, id: &str) -> Result<Property> {
        let mut board = self.board.write().await;
        let position = board
            .pending
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PropertyNotFound)?;

        Ok(board.pending.remove(position))
    }

    /// Live listings matching the filter, in approval order
    pub async fn active(&self, filter: &ListingFilter) -> Vec<Property> {
        self.board
            .read()
            .await
            .active
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Head of the live board, shown on the home page
    pub async fn featured(&self) -> Vec<Property> {
        self.board
            .read()
            .await
            .active
            .iter()
            .take(FEATURED_LISTING_COUNT)
            .cloned()
            .collect()
    }

    /// Look up a live listing by ID
    pub async fn find_active(&self, id: &str) -> Option<Property> {
        self.board
            .read()
            .await
            .active
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}
