//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::{DomainError, DomainResult};

/// Half-open stay interval `[check_in, check_out)`.
///
/// The check-out day is not occupied, so a stay ending on the 5th and one
/// starting on the 5th do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::invalid_field(
                "check_out_date",
                "Check-out date must be after check-in date.",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// `[a, b)` and `[c, d)` overlap iff `a < d` and `c < b`.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A confirmed booking of a room by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub user_id: String,
    pub period: StayPeriod,
    pub created_at: DateTime<Utc>,
}

/// Reservation not yet persisted.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub room_id: i32,
    pub user_id: String,
    pub period: StayPeriod,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn period(from: &str, to: &str) -> StayPeriod {
        StayPeriod::new(date(from), date(to)).unwrap()
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let same_day = StayPeriod::new(date("2024-06-01"), date("2024-06-01"));
        assert!(matches!(
            same_day,
            Err(DomainError::InvalidField {
                field: "check_out_date",
                ..
            })
        ));
        assert!(StayPeriod::new(date("2024-06-05"), date("2024-06-01")).is_err());
    }

    #[test]
    fn overlapping_stays_conflict_in_both_directions() {
        let booked = period("2024-06-01", "2024-06-05");
        let late = period("2024-06-04", "2024-06-08");
        assert!(booked.overlaps(&late));
        assert!(late.overlaps(&booked));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        let booked = period("2024-06-01", "2024-06-05");
        let next = period("2024-06-05", "2024-06-08");
        assert!(!booked.overlaps(&next));
        assert!(!next.overlaps(&booked));
    }

    #[test]
    fn enclosed_stay_overlaps() {
        let outer = period("2024-06-01", "2024-06-10");
        let inner = period("2024-06-03", "2024-06-04");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn nights_counts_exclusive_check_out() {
        assert_eq!(period("2024-06-01", "2024-06-05").nights(), 4);
    }
}
