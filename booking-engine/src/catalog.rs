//! Catalog cache
//!
//! Explicit fetch-once cache for session reference data: accommodations,
//! coupons and amenities. `warmup()` loads everything in one pass and
//! degrades per collection, so a failed coupon fetch leaves coupons empty
//! and logged instead of blocking the page. Invalidation is building a new
//! cache for a new session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{Accommodation, Amenity, Coupon};

use lagoon_client::BookingApi;

/// In-memory reference-data cache shared read-only across a session
#[derive(Clone)]
pub struct CatalogCache {
    api: Arc<dyn BookingApi>,
    accommodations: Arc<RwLock<HashMap<String, Accommodation>>>,
    coupons: Arc<RwLock<Vec<Coupon>>>,
    amenities: Arc<RwLock<Vec<Amenity>>>,
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache")
            .field("accommodations_count", &self.accommodations.read().len())
            .field("coupons_count", &self.coupons.read().len())
            .field("amenities_count", &self.amenities.read().len())
            .finish()
    }
}

impl CatalogCache {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            accommodations: Arc::new(RwLock::new(HashMap::new())),
            coupons: Arc::new(RwLock::new(Vec::new())),
            amenities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn api(&self) -> Arc<dyn BookingApi> {
        self.api.clone()
    }

    /// Load all reference data into memory.
    ///
    /// Each collection degrades independently on fetch failure; warmup
    /// itself never fails.
    pub async fn warmup(&self) {
        match self.api.list_accommodations().await {
            Ok(list) => {
                let mut cache = self.accommodations.write();
                cache.clear();
                for accommodation in list {
                    cache.insert(accommodation.id.clone(), accommodation);
                }
                tracing::debug!(count = cache.len(), "Catalog: loaded accommodations");
            }
            Err(e) => {
                tracing::warn!("Catalog: failed to load accommodations: {e}");
            }
        }

        match self.api.list_coupons().await {
            Ok(list) => {
                tracing::debug!(count = list.len(), "Catalog: loaded coupons");
                *self.coupons.write() = list;
            }
            Err(e) => {
                tracing::warn!("Catalog: failed to load coupons, none will apply: {e}");
            }
        }

        match self.api.list_amenities().await {
            Ok(list) => {
                tracing::debug!(count = list.len(), "Catalog: loaded amenities");
                *self.amenities.write() = list;
            }
            Err(e) => {
                tracing::warn!("Catalog: failed to load amenities, icons omitted: {e}");
            }
        }
    }

    pub fn get_accommodation(&self, id: &str) -> Option<Accommodation> {
        self.accommodations.read().get(id).cloned()
    }

    /// All cached accommodations, sorted by name for stable listing
    pub fn list_accommodations(&self) -> Vec<Accommodation> {
        let mut list: Vec<Accommodation> = self.accommodations.read().values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    pub fn coupons(&self) -> Vec<Coupon> {
        self.coupons.read().clone()
    }

    /// Case-insensitive coupon lookup
    pub fn find_coupon(&self, code: &str) -> Option<Coupon> {
        self.coupons
            .read()
            .iter()
            .find(|coupon| coupon.code.eq_ignore_ascii_case(code.trim()))
            .cloned()
    }

    pub fn amenities(&self) -> Vec<Amenity> {
        self.amenities.read().clone()
    }
}
