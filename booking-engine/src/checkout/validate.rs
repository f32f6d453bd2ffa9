//! Draft validation
//!
//! Collects every violated rule in one pass into an ordered field/message
//! list. The order is the scroll priority a host should surface: contact
//! fields first, then dates, food parity, room count, and per-room guest
//! minimums last.

use std::fmt;

use crate::draft::{MIN_GUESTS_PER_ROOM, ReservationDraft};

/// A draft field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    CheckIn,
    Food,
    RoomCount,
    /// Zero-based room index
    Room(usize),
}

/// Ordered collection of validation failures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(Field, String)>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Highest-priority failure, the one a host should scroll to
    pub fn first(&self) -> Option<(Field, &str)> {
        self.errors.first().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Message for a specific field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [(_, msg)] => write!(f, "{msg}"),
            errors => write!(f, "{} fields need attention", errors.len()),
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Validate the complete draft, collecting all violations at once
/// rather than stopping at the first.
pub fn validate_draft(draft: &ReservationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let contact = draft.contact();

    if contact.name.trim().is_empty() {
        errors.push(Field::Name, "Please enter your name");
    }
    if !is_valid_email(&contact.email) {
        errors.push(Field::Email, "Please enter a valid email address");
    }
    if !is_valid_phone(&contact.phone) {
        errors.push(Field::Phone, "Phone number must be exactly 10 digits");
    }
    if draft.check_in().is_none() {
        errors.push(Field::CheckIn, "Please select a check-in date");
    }
    if !draft.food_parity_ok() {
        errors.push(
            Field::Food,
            format!(
                "Meal preferences must account for all {} guests",
                draft.total_guests()
            ),
        );
    }
    if draft.room_count() == 0 {
        errors.push(Field::RoomCount, "Please select at least one room");
    }
    for (index, room) in draft.room_guests().iter().enumerate() {
        if room.total() < MIN_GUESTS_PER_ROOM {
            errors.push(
                Field::Room(index),
                format!("Room {} needs at least {MIN_GUESTS_PER_ROOM} guests", index + 1),
            );
        }
    }

    errors
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::GuestField;
    use chrono::NaiveDate;
    use shared::{FoodCounts, GuestContact};

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn complete_draft() -> ReservationDraft {
        let mut draft = ReservationDraft::new();
        draft.set_check_in(june(1));
        draft.set_room_count(2, 5);
        draft.set_room_guests(1, GuestField::Children, 1, 4);
        draft.set_food_counts(FoodCounts {
            veg: 3,
            non_veg: 2,
            jain: 0,
        });
        draft.set_contact(GuestContact {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        });
        draft
    }

    #[test]
    fn test_complete_draft_passes() {
        let errors = validate_draft(&complete_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_field_in_priority_order() {
        let mut draft = ReservationDraft::new();
        // Stray meal selection with no guests breaks parity too
        draft.set_food_counts(FoodCounts {
            veg: 1,
            non_veg: 0,
            jain: 0,
        });

        let errors = validate_draft(&draft);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::CheckIn,
                Field::Food,
                Field::RoomCount,
            ]
        );
        assert_eq!(errors.first().map(|(field, _)| field), Some(Field::Name));
    }

    #[test]
    fn test_food_mismatch_reports_total_guests() {
        let mut draft = complete_draft();
        draft.set_food_counts(FoodCounts {
            veg: 1,
            non_veg: 0,
            jain: 0,
        });

        let errors = validate_draft(&draft);
        assert_eq!(
            errors.get(Field::Food),
            Some("Meal preferences must account for all 5 guests")
        );
    }

    #[test]
    fn test_room_below_minimum_is_flagged_per_room() {
        let mut draft = complete_draft();
        draft.force_room_guests(1, 1, 0);
        // Meal counts match the reduced guest total
        draft.set_food_counts(FoodCounts {
            veg: 3,
            non_veg: 0,
            jain: 0,
        });

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Room(1)),
            Some("Room 2 needs at least 2 guests")
        );
        assert!(errors.get(Field::Room(0)).is_none());
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("  asha@example.com  "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("asha"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("asha@.com"));
        assert!(!is_valid_email("asha rao@example.com"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone(" 9876543210 "));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765abc10"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_single_failure_displays_its_message() {
        let mut draft = complete_draft();
        draft.set_contact(GuestContact {
            name: "Asha Rao".to_string(),
            email: "not-an-email".to_string(),
            phone: "9876543210".to_string(),
        });

        let errors = validate_draft(&draft);
        assert_eq!(errors.to_string(), "Please enter a valid email address");

        let mut empty = ReservationDraft::new();
        empty.set_food_counts(FoodCounts {
            veg: 1,
            non_veg: 0,
            jain: 0,
        });
        assert_eq!(
            validate_draft(&empty).to_string(),
            "6 fields need attention"
        );
    }
}
