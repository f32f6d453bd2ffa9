//! Booking session
//!
//! One guest's in-progress reservation against one accommodation. The
//! session pulls calendar overrides once at start, re-fetches live
//! occupancy on every date change, owns the draft and its clamps, and
//! hands submission to the checkout pipeline.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use lagoon_client::{BookingApi, ClientResult};
use shared::{Accommodation, Coupon, FoodCounts, GuestContact};

use crate::availability::{AvailabilityResolver, CalendarDay};
use crate::catalog::CatalogCache;
use crate::checkout::{self, CheckoutComplete, CheckoutError, CheckoutObserver, Field};
use crate::draft::{GuestField, ReservationDraft};
use crate::pricing::{self, CouponError, Quote};

pub struct BookingSession {
    id: Uuid,
    api: Arc<dyn BookingApi>,
    catalog: CatalogCache,
    accommodation: Accommodation,
    resolver: AvailabilityResolver,
    draft: ReservationDraft,
    /// Booked rooms on the drafted check-in date; `None` when the
    /// occupancy fetch degraded
    occupancy: Option<u32>,
    coupon_error: Option<String>,
}

impl BookingSession {
    /// Open a session for one accommodation.
    ///
    /// The accommodation comes from the warmed catalog when present,
    /// falling back to a direct fetch. A failed override fetch degrades
    /// to base-rooms-only availability instead of failing the session.
    pub async fn start(catalog: &CatalogCache, accommodation_id: &str) -> ClientResult<Self> {
        let api = catalog.api();
        let accommodation = match catalog.get_accommodation(accommodation_id) {
            Some(accommodation) => accommodation,
            None => api.get_accommodation(accommodation_id).await?,
        };

        let overrides = match api.list_date_overrides(&accommodation.id).await {
            Ok(overrides) => overrides,
            Err(e) => {
                tracing::warn!(
                    accommodation_id = %accommodation.id,
                    "Date override fetch failed, using base rooms only: {e}"
                );
                Vec::new()
            }
        };
        let resolver = AvailabilityResolver::new(&accommodation, overrides);

        Ok(Self {
            id: Uuid::new_v4(),
            api,
            catalog: catalog.clone(),
            accommodation,
            resolver,
            draft: ReservationDraft::new(),
            occupancy: None,
            coupon_error: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn accommodation(&self) -> &Accommodation {
        &self.accommodation
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Message from the last failed coupon application
    pub fn coupon_error(&self) -> Option<&str> {
        self.coupon_error.as_deref()
    }

    /// Calendar cells for every known override date from `today` on
    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarDay> {
        self.resolver.calendar(today)
    }

    pub fn resolver(&self) -> &AvailabilityResolver {
        &self.resolver
    }

    /// Rooms available on the drafted check-in date
    pub fn available_rooms(&self) -> u32 {
        match self.draft.check_in() {
            Some(date) => self.resolver.available_rooms(date, self.occupancy),
            None => 0,
        }
    }

    /// Choose a check-in date.
    ///
    /// Past dates are rejected without a network call. Otherwise fresh
    /// occupancy is fetched for the date; a failed fetch degrades to
    /// assuming nothing is booked. Returns false and leaves the draft
    /// untouched when the date is not selectable.
    pub async fn select_check_in(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        if date < today {
            return false;
        }

        let occupancy = match self.api.room_occupancy(&self.accommodation.id, date).await {
            Ok(occupancy) => Some(occupancy.booked_rooms),
            Err(e) => {
                tracing::warn!(
                    session = %self.id,
                    %date,
                    "Occupancy fetch failed, assuming none booked: {e}"
                );
                None
            }
        };

        if !self.resolver.is_selectable(date, today, occupancy) {
            return false;
        }

        self.occupancy = occupancy;
        self.draft.set_check_in(date);
        // The room range may shrink on the new date; re-clamping also
        // resets meal counts when the count actually changes
        let available = self.available_rooms();
        self.draft.set_room_count(self.draft.room_count(), available);
        true
    }

    /// Set the number of rooms, clamped to current availability
    pub fn set_room_count(&mut self, requested: u32) {
        let available = self.available_rooms();
        self.draft.set_room_count(requested, available);
    }

    /// Adjust one room's adult or child count
    pub fn set_room_guests(&mut self, index: usize, field: GuestField, value: u32) {
        self.draft
            .set_room_guests(index, field, value, self.accommodation.max_guests_per_room);
    }

    pub fn set_food_counts(&mut self, counts: FoodCounts) {
        self.draft.set_food_counts(counts);
    }

    pub fn set_contact(&mut self, contact: GuestContact) {
        self.draft.set_contact(contact);
    }

    /// Price the draft as it stands
    pub fn quote(&self) -> Quote {
        pricing::quote(
            &self.accommodation,
            self.check_in_override(),
            self.draft.room_guests(),
            self.nights(),
            self.draft.applied_coupon(),
        )
    }

    /// Validate a coupon code against the pre-discount subtotal and apply
    /// it.
    ///
    /// Failure stores a user-facing message and leaves any previously
    /// applied coupon in place.
    pub fn apply_coupon(&mut self, code: &str) -> Result<Coupon, CouponError> {
        let subtotal = pricing::subtotal(
            &self.accommodation,
            self.check_in_override(),
            self.draft.room_guests(),
            self.nights(),
        );
        match pricing::check_coupon(&self.catalog.coupons(), code, subtotal, Utc::now()) {
            Ok(coupon) => {
                self.coupon_error = None;
                self.draft.set_coupon(Some(coupon.clone()));
                Ok(coupon)
            }
            Err(e) => {
                tracing::debug!(session = %self.id, code, "Coupon rejected: {e}");
                self.coupon_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn remove_coupon(&mut self) {
        self.draft.set_coupon(None);
        self.coupon_error = None;
    }

    /// Run the submission pipeline for the current draft.
    ///
    /// On validation failure the meal-parity message, if any, is also
    /// stored on the draft so hosts can render it inline; the next guest
    /// or room change clears it.
    pub async fn checkout(
        &mut self,
        observer: &mut dyn CheckoutObserver,
    ) -> Result<CheckoutComplete, CheckoutError> {
        let quote = self.quote();
        let result = checkout::run_checkout(
            self.api.as_ref(),
            &self.accommodation.id,
            &self.draft,
            &quote,
            observer,
        )
        .await;

        if let Err(CheckoutError::Validation(errors)) = &result {
            if let Some(message) = errors.get(Field::Food) {
                let message = message.to_string();
                self.draft.set_food_error(message);
            }
        }
        result
    }

    fn nights(&self) -> u32 {
        pricing::nights(self.draft.check_in(), self.draft.check_out())
    }

    fn check_in_override(&self) -> Option<&shared::DateOverride> {
        self.draft
            .check_in()
            .and_then(|date| self.resolver.override_for(date))
    }
}

impl std::fmt::Debug for BookingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingSession")
            .field("id", &self.id)
            .field("accommodation", &self.accommodation.id)
            .field("check_in", &self.draft.check_in())
            .field("rooms", &self.draft.room_count())
            .finish()
    }
}

// ========== Tests ==========
