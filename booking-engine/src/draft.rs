//! Reservation draft and guest allocation
//!
//! The draft is the one mutable entity of a booking session. Every
//! guest-affecting operation is a transition that clamps its input and
//! recomputes the derived state inline, so the food-reset rule cannot be
//! skipped at any call site: changing the room count or any room's guest
//! split always zeroes the meal counts and clears the food-parity error.

use chrono::{Duration, NaiveDate};
use shared::{Coupon, FoodCounts, GuestContact, RoomGuests};

/// A room never holds fewer than two guests
pub const MIN_GUESTS_PER_ROOM: u32 = 2;

/// Which side of a room's guest split is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Adults,
    Children,
}

/// Reservation-in-progress state, exclusively owned by one session
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    check_in: Option<NaiveDate>,
    room_guests: Vec<RoomGuests>,
    food_counts: FoodCounts,
    contact: GuestContact,
    applied_coupon: Option<Coupon>,
    food_error: Option<String>,
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    /// Check-out is always check-in plus one night
    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_in.map(|date| date + Duration::days(1))
    }

    pub fn room_count(&self) -> u32 {
        self.room_guests.len() as u32
    }

    pub fn room_guests(&self) -> &[RoomGuests] {
        &self.room_guests
    }

    pub fn food_counts(&self) -> FoodCounts {
        self.food_counts
    }

    pub fn food_error(&self) -> Option<&str> {
        self.food_error.as_deref()
    }

    pub fn contact(&self) -> &GuestContact {
        &self.contact
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    pub fn total_guests(&self) -> u32 {
        self.room_guests.iter().map(RoomGuests::total).sum()
    }

    pub fn food_parity_ok(&self) -> bool {
        self.food_counts.total() == self.total_guests()
    }

    // ========== Transitions ==========

    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.check_in = Some(date);
    }

    /// Set the number of rooms, clamped to `[0, available]`.
    ///
    /// New rooms start at the minimum valid occupancy `{adults: 2,
    /// children: 0}`; removed rooms are truncated from the tail. Any
    /// actual change resets the meal counts.
    pub fn set_room_count(&mut self, requested: u32, available: u32) {
        let clamped = requested.min(available) as usize;
        if clamped == self.room_guests.len() {
            return;
        }
        self.room_guests.resize(clamped, RoomGuests::default());
        self.reset_food();
    }

    /// Edit one side of a room's guest split.
    ///
    /// The value is clamped so the room total stays within
    /// `[MIN_GUESTS_PER_ROOM, max_guests_per_room]`; the non-edited field
    /// constrains the range (more adults leaves less headroom for
    /// children, and vice versa). Any actual change resets the meal
    /// counts.
    pub fn set_room_guests(
        &mut self,
        index: usize,
        field: GuestField,
        value: u32,
        max_guests_per_room: u32,
    ) {
        let Some(room) = self.room_guests.get_mut(index) else {
            return;
        };
        let other = match field {
            GuestField::Adults => room.children,
            GuestField::Children => room.adults,
        };
        let lower = MIN_GUESTS_PER_ROOM.saturating_sub(other);
        let upper = max_guests_per_room.saturating_sub(other).max(lower);
        let clamped = value.clamp(lower, upper);

        let current = match field {
            GuestField::Adults => &mut room.adults,
            GuestField::Children => &mut room.children,
        };
        if *current == clamped {
            return;
        }
        *current = clamped;
        self.reset_food();
    }

    pub fn set_food_counts(&mut self, counts: FoodCounts) {
        self.food_counts = counts;
    }

    pub fn set_food_error(&mut self, message: impl Into<String>) {
        self.food_error = Some(message.into());
    }

    pub fn set_contact(&mut self, contact: GuestContact) {
        self.contact = contact;
    }

    pub fn set_coupon(&mut self, coupon: Option<Coupon>) {
        self.applied_coupon = coupon;
    }

    /// Food totals derive from guest totals; a stale count would silently
    /// under- or over-count meals, so guest changes always zero them.
    fn reset_food(&mut self) {
        self.food_counts = FoodCounts::default();
        self.food_error = None;
    }

    /// Bypass the guest clamps, for exercising validation paths the
    /// transitions themselves rule out.
    #[cfg(test)]
    pub(crate) fn force_room_guests(&mut self, index: usize, adults: u32, children: u32) {
        self.room_guests[index] = RoomGuests { adults, children };
    }
}
