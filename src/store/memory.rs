//! In-memory implementation of the sponsorship store.
//!
//! # Purpose
//! This store implements the `SponsorshipStore` trait entirely in memory using
//! snapshot vectors guarded by `tokio::sync::RwLock`. It is the dashboard's
//! only backend: state lives for the process lifetime and is rebuilt from seed
//! data on startup.
//!
//! # Snapshots and revisions
//! Each collection holds an `Arc<Vec<T>>` plus a revision counter. A mutation
//! never edits an entity in place: it builds a fresh vector, swaps it in, and
//! bumps the revision. Consumers holding a `Snapshot` detect change by
//! comparing revisions (or `Arc::ptr_eq`) instead of diffing items.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process exit.
//! - **Single-process consistency**: write locks serialize mutations; reads
//!   are concurrent.
//! - **No atomicity across calls**: "add a sponsor, then book it" is two
//!   operations with no rollback if the second fails.
//!
//! # Referential integrity
//! Bookings reference sponsors and offerings by id. Creating or editing a
//! booking verifies both references; deleting a sponsor or offering cascades
//! to its bookings by scanning, which is acceptable at dashboard scale.
//!
//! # Metrics
//! Mutators update a small set of gauges (collection sizes) and counters
//! (booking changes) so embedders can watch the store without polling it.
use super::{Snapshot, SponsorshipStore, StoreError, StoreResult};
use crate::model::{Booking, Game, Offering, Sponsor};
use crate::seed;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One dashboard collection: the current snapshot vector plus the revision it
/// was swapped in at.
#[derive(Debug)]
struct Collection<T> {
    items: Arc<Vec<T>>,
    revision: u64,
}

impl<T: Clone> Collection<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            revision: 0,
        }
    }

    /// Swaps in a freshly built vector and bumps the revision.
    fn replace(&mut self, items: Vec<T>) {
        self.items = Arc::new(items);
        self.revision += 1;
    }

    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            items: Arc::clone(&self.items),
            revision: self.revision,
        }
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.as_ref().clone()
    }
}

/// In-memory sponsorship store.
///
/// ## Data structures
/// Each collection is a `Collection` (shared vector + revision) behind its own
/// `RwLock`, so reads proceed concurrently and writes serialize per
/// collection. The store itself is shared as `Arc<dyn SponsorshipStore>`.
///
/// ## Cascading deletes
/// Deleting a sponsor or offering removes dependent bookings by scanning.
/// Existence checks take short read locks of their own, so no two collection
/// locks are ever held at once.
pub struct InMemoryStore {
    /// Sponsor roster in display order.
    sponsors: RwLock<Collection<Sponsor>>,
    /// Offering catalog in display order.
    offerings: RwLock<Collection<Offering>>,
    /// Bookings in creation order.
    bookings: RwLock<Collection<Booking>>,
    /// Flat category list shared by sponsors and offerings. Duplicates are
    /// allowed; entries are bare labels.
    categories: RwLock<Collection<String>>,
    /// Game schedule in display order.
    games: RwLock<Collection<Game>>,
}

impl InMemoryStore {
    /// Empty store with no seed data.
    pub fn new() -> Self {
        Self::with_collections(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Store preloaded with the demo roster, catalog, category preset, and
    /// game schedule. Bookings always start empty.
    pub fn with_seed_data() -> Self {
        Self::with_collections(
            seed::initial_sponsors(),
            seed::initial_offerings(),
            seed::initial_categories(),
            seed::initial_schedule(),
        )
    }

    fn with_collections(
        sponsors: Vec<Sponsor>,
        offerings: Vec<Offering>,
        categories: Vec<String>,
        games: Vec<Game>,
    ) -> Self {
        Self {
            sponsors: RwLock::new(Collection::new(sponsors)),
            offerings: RwLock::new(Collection::new(offerings)),
            bookings: RwLock::new(Collection::new(Vec::new())),
            categories: RwLock::new(Collection::new(categories)),
            games: RwLock::new(Collection::new(games)),
        }
    }

    fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Today in the club's local timezone; bookings compare calendar dates,
    /// not instants.
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Removes every booking matching `predicate`. Shared by the sponsor and
    /// offering cascade paths.
    async fn drop_bookings_where(&self, predicate: impl Fn(&Booking) -> bool) {
        let mut bookings = self.bookings.write().await;
        let remaining: Vec<Booking> = bookings
            .items
            .iter()
            .filter(|booking| !predicate(booking))
            .cloned()
            .collect();
        let removed = bookings.items.len() - remaining.len();
        if removed > 0 {
            bookings.replace(remaining);
            metrics::counter!("sideline_booking_changes_total", "op" => "cascade_deleted")
                .increment(removed as u64);
            metrics::gauge!("sideline_bookings_total").set(bookings.items.len() as f64);
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SponsorshipStore for InMemoryStore {
    async fn list_sponsors(&self) -> StoreResult<Vec<Sponsor>> {
        Ok(self.sponsors.read().await.to_vec())
    }

    async fn get_sponsor(&self, sponsor_id: &str) -> StoreResult<Sponsor> {
        self.sponsors
            .read()
            .await
            .items
            .iter()
            .find(|s| s.id == sponsor_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("sponsor".into()))
    }

    async fn add_sponsor(&self, mut sponsor: Sponsor) -> StoreResult<Sponsor> {
        // Quick-add and CSV import leave the id empty; detail forms may carry
        // one, which must stay unique.
        let mut sponsors = self.sponsors.write().await;
        if sponsor.id.is_empty() {
            sponsor.id = Self::fresh_id();
        } else if sponsors.items.iter().any(|s| s.id == sponsor.id) {
            return Err(StoreError::Conflict("sponsor exists".into()));
        }
        let mut items = sponsors.to_vec();
        items.push(sponsor.clone());
        sponsors.replace(items);
        metrics::gauge!("sideline_sponsors_total").set(sponsors.items.len() as f64);
        Ok(sponsor)
    }

    async fn edit_sponsor(&self, sponsor: Sponsor) -> StoreResult<Sponsor> {
        let mut sponsors = self.sponsors.write().await;
        let pos = sponsors
            .items
            .iter()
            .position(|s| s.id == sponsor.id)
            .ok_or_else(|| StoreError::NotFound("sponsor".into()))?;
        let mut items = sponsors.to_vec();
        items[pos] = sponsor.clone();
        sponsors.replace(items);
        Ok(sponsor)
    }

    async fn delete_sponsor(&self, sponsor_id: &str) -> StoreResult<()> {
        let mut sponsors = self.sponsors.write().await;
        if !sponsors.items.iter().any(|s| s.id == sponsor_id) {
            return Err(StoreError::NotFound("sponsor".into()));
        }
        let items = sponsors
            .items
            .iter()
            .filter(|s| s.id != sponsor_id)
            .cloned()
            .collect();
        sponsors.replace(items);
        metrics::gauge!("sideline_sponsors_total").set(sponsors.items.len() as f64);
        drop(sponsors);
        // Cascading delete: bookings referencing the sponsor go with it.
        self.drop_bookings_where(|b| b.sponsor_id == sponsor_id)
            .await;
        Ok(())
    }

    async fn sponsor_snapshot(&self) -> StoreResult<Snapshot<Sponsor>> {
        Ok(self.sponsors.read().await.snapshot())
    }

    async fn list_offerings(&self) -> StoreResult<Vec<Offering>> {
        Ok(self.offerings.read().await.to_vec())
    }

    async fn get_offering(&self, offering_id: &str) -> StoreResult<Offering> {
        self.offerings
            .read()
            .await
            .items
            .iter()
            .find(|o| o.id == offering_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("offering".into()))
    }

    async fn add_offering(&self, mut offering: Offering) -> StoreResult<Offering> {
        let mut offerings = self.offerings.write().await;
        if offering.id.is_empty() {
            offering.id = Self::fresh_id();
        } else if offerings.items.iter().any(|o| o.id == offering.id) {
            return Err(StoreError::Conflict("offering exists".into()));
        }
        // `total_quantity` is derived from the variant list once, here. Edits
        // leave it caller-controlled.
        offering.total_quantity = offering.variants.len() as u32;
        let mut items = offerings.to_vec();
        items.push(offering.clone());
        offerings.replace(items);
        metrics::gauge!("sideline_offerings_total").set(offerings.items.len() as f64);
        Ok(offering)
    }

    async fn edit_offering(&self, offering: Offering) -> StoreResult<Offering> {
        let mut offerings = self.offerings.write().await;
        let pos = offerings
            .items
            .iter()
            .position(|o| o.id == offering.id)
            .ok_or_else(|| StoreError::NotFound("offering".into()))?;
        let mut items = offerings.to_vec();
        items[pos] = offering.clone();
        offerings.replace(items);
        Ok(offering)
    }

    async fn delete_offering(&self, offering_id: &str) -> StoreResult<()> {
        let mut offerings = self.offerings.write().await;
        if !offerings.items.iter().any(|o| o.id == offering_id) {
            return Err(StoreError::NotFound("offering".into()));
        }
        let items = offerings
            .items
            .iter()
            .filter(|o| o.id != offering_id)
            .cloned()
            .collect();
        offerings.replace(items);
        metrics::gauge!("sideline_offerings_total").set(offerings.items.len() as f64);
        drop(offerings);
        // Cascading delete: bookings referencing the offering go with it.
        self.drop_bookings_where(|b| b.offering_id == offering_id)
            .await;
        Ok(())
    }

    async fn offering_snapshot(&self) -> StoreResult<Snapshot<Offering>> {
        Ok(self.offerings.read().await.snapshot())
    }

    async fn list_bookings(&self) -> StoreResult<Vec<Booking>> {
        Ok(self.bookings.read().await.to_vec())
    }

    async fn add_booking(&self, mut booking: Booking) -> StoreResult<Booking> {
        // Reference checks run before anything is stored: a dead sponsor or
        // offering id rejects the whole booking.
        let sponsor = self.get_sponsor(&booking.sponsor_id).await?;
        let offering = self.get_offering(&booking.offering_id).await?;
        // A caller-supplied id is always discarded.
        booking.id = Self::fresh_id();
        booking.sponsor_name = sponsor.name;
        booking.offering_name = offering.name;
        booking.is_active = booking.is_active_on(Self::today());
        let mut bookings = self.bookings.write().await;
        let mut items = bookings.to_vec();
        items.push(booking.clone());
        bookings.replace(items);
        metrics::counter!("sideline_booking_changes_total", "op" => "created").increment(1);
        metrics::gauge!("sideline_bookings_total").set(bookings.items.len() as f64);
        Ok(booking)
    }

    async fn edit_booking(&self, mut booking: Booking) -> StoreResult<Booking> {
        let sponsor = self.get_sponsor(&booking.sponsor_id).await?;
        let offering = self.get_offering(&booking.offering_id).await?;
        let mut bookings = self.bookings.write().await;
        let pos = bookings
            .items
            .iter()
            .position(|b| b.id == booking.id)
            .ok_or_else(|| StoreError::NotFound("booking".into()))?;
        // An edit refreshes the denormalized names and the activity snapshot
        // the same way creation does.
        booking.sponsor_name = sponsor.name;
        booking.offering_name = offering.name;
        booking.is_active = booking.is_active_on(Self::today());
        let mut items = bookings.to_vec();
        items[pos] = booking.clone();
        bookings.replace(items);
        metrics::counter!("sideline_booking_changes_total", "op" => "updated").increment(1);
        Ok(booking)
    }

    async fn delete_booking(&self, booking_id: &str) -> StoreResult<()> {
        let mut bookings = self.bookings.write().await;
        if !bookings.items.iter().any(|b| b.id == booking_id) {
            return Err(StoreError::NotFound("booking".into()));
        }
        let items = bookings
            .items
            .iter()
            .filter(|b| b.id != booking_id)
            .cloned()
            .collect();
        bookings.replace(items);
        metrics::counter!("sideline_booking_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("sideline_bookings_total").set(bookings.items.len() as f64);
        Ok(())
    }

    async fn booking_snapshot(&self) -> StoreResult<Snapshot<Booking>> {
        Ok(self.bookings.read().await.snapshot())
    }

    async fn list_categories(&self) -> StoreResult<Vec<String>> {
        Ok(self.categories.read().await.to_vec())
    }

    async fn add_category(&self, category: &str) -> StoreResult<()> {
        // No uniqueness check: the list tolerates duplicates.
        let mut categories = self.categories.write().await;
        let mut items = categories.to_vec();
        items.push(category.to_string());
        categories.replace(items);
        metrics::gauge!("sideline_categories_total").set(categories.items.len() as f64);
        Ok(())
    }

    async fn update_category(&self, old_category: &str, new_category: &str) -> StoreResult<()> {
        {
            let mut categories = self.categories.write().await;
            let items = categories
                .items
                .iter()
                .map(|c| {
                    if c.as_str() == old_category {
                        new_category.to_string()
                    } else {
                        c.clone()
                    }
                })
                .collect();
            categories.replace(items);
        }
        // The rename cascades to sponsors only. Offerings keep the old label;
        // the catalog treats its category field as free text.
        let mut sponsors = self.sponsors.write().await;
        let items = sponsors
            .items
            .iter()
            .map(|s| {
                if s.category == old_category {
                    let mut sponsor = s.clone();
                    sponsor.category = new_category.to_string();
                    sponsor
                } else {
                    s.clone()
                }
            })
            .collect();
        sponsors.replace(items);
        Ok(())
    }

    async fn delete_category(&self, category: &str) -> StoreResult<()> {
        // Removes list entries only. Sponsors and offerings still carrying the
        // label keep it and now reference a nonexistent category.
        let mut categories = self.categories.write().await;
        let items = categories
            .items
            .iter()
            .filter(|c| c.as_str() != category)
            .cloned()
            .collect();
        categories.replace(items);
        metrics::gauge!("sideline_categories_total").set(categories.items.len() as f64);
        Ok(())
    }

    async fn category_snapshot(&self) -> StoreResult<Snapshot<String>> {
        Ok(self.categories.read().await.snapshot())
    }

    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(self.games.read().await.to_vec())
    }

    async fn add_game(&self, mut game: Game) -> StoreResult<Game> {
        // Schedule entries always get a fresh id; the add-game form never
        // carries one worth keeping.
        let mut games = self.games.write().await;
        game.id = Self::fresh_id();
        let mut items = games.to_vec();
        items.push(game.clone());
        games.replace(items);
        metrics::gauge!("sideline_games_total").set(games.items.len() as f64);
        Ok(game)
    }

    async fn game_snapshot(&self) -> StoreResult<Snapshot<Game>> {
        Ok(self.games.read().await.snapshot())
    }

    async fn sponsor_exists(&self, sponsor_id: &str) -> StoreResult<bool> {
        Ok(self
            .sponsors
            .read()
            .await
            .items
            .iter()
            .any(|s| s.id == sponsor_id))
    }

    async fn offering_exists(&self, offering_id: &str) -> StoreResult<bool> {
        Ok(self
            .offerings
            .read()
            .await
            .items
            .iter()
            .any(|o| o.id == offering_id))
    }
}
