use crate::model::{Booking, Game, Offering, Sponsor};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub mod memory;

/// Read-only view of one collection: the shared items plus the revision the
/// view was taken at. A consumer re-polls and compares revisions (or
/// `Arc::ptr_eq` on `items`) to detect change without diffing entries.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub items: Arc<Vec<T>>,
    pub revision: u64,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait SponsorshipStore: Send + Sync {
    async fn list_sponsors(&self) -> StoreResult<Vec<Sponsor>>;
    async fn get_sponsor(&self, sponsor_id: &str) -> StoreResult<Sponsor>;
    async fn add_sponsor(&self, sponsor: Sponsor) -> StoreResult<Sponsor>;
    async fn edit_sponsor(&self, sponsor: Sponsor) -> StoreResult<Sponsor>;
    async fn delete_sponsor(&self, sponsor_id: &str) -> StoreResult<()>;
    async fn sponsor_snapshot(&self) -> StoreResult<Snapshot<Sponsor>>;

    async fn list_offerings(&self) -> StoreResult<Vec<Offering>>;
    async fn get_offering(&self, offering_id: &str) -> StoreResult<Offering>;
    async fn add_offering(&self, offering: Offering) -> StoreResult<Offering>;
    async fn edit_offering(&self, offering: Offering) -> StoreResult<Offering>;
    async fn delete_offering(&self, offering_id: &str) -> StoreResult<()>;
    async fn offering_snapshot(&self) -> StoreResult<Snapshot<Offering>>;

    async fn list_bookings(&self) -> StoreResult<Vec<Booking>>;
    async fn add_booking(&self, booking: Booking) -> StoreResult<Booking>;
    async fn edit_booking(&self, booking: Booking) -> StoreResult<Booking>;
    async fn delete_booking(&self, booking_id: &str) -> StoreResult<()>;
    async fn booking_snapshot(&self) -> StoreResult<Snapshot<Booking>>;

    async fn list_categories(&self) -> StoreResult<Vec<String>>;
    async fn add_category(&self, category: &str) -> StoreResult<()>;
    async fn update_category(&self, old_category: &str, new_category: &str) -> StoreResult<()>;
    async fn delete_category(&self, category: &str) -> StoreResult<()>;
    async fn category_snapshot(&self) -> StoreResult<Snapshot<String>>;

    async fn list_games(&self) -> StoreResult<Vec<Game>>;
    async fn add_game(&self, game: Game) -> StoreResult<Game>;
    async fn game_snapshot(&self) -> StoreResult<Snapshot<Game>>;

    async fn sponsor_exists(&self, sponsor_id: &str) -> StoreResult<bool>;
    async fn offering_exists(&self, offering_id: &str) -> StoreResult<bool>;
}
