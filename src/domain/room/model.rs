//! Room domain entity

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::shared::{DomainError, DomainResult};

/// Fractional digits kept for room prices.
pub const PRICE_SCALE: u32 = 2;

/// A bookable room belonging to one hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub room_type: String,
    pub capacity: i32,
    /// Nightly price, two decimal places.
    pub price: Decimal,
    /// Dates on which the room is offered.
    pub available_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RoomDraft {
    pub hotel_id: i32,
    pub room_type: String,
    pub capacity: i32,
    pub price: Decimal,
    pub available_dates: BTreeSet<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub hotel_id: Option<i32>,
    pub room_type: Option<String>,
    pub capacity: Option<i32>,
    pub price: Option<Decimal>,
    pub available_dates: Option<BTreeSet<NaiveDate>>,
}

impl From<RoomDraft> for RoomPatch {
    fn from(draft: RoomDraft) -> Self {
        Self {
            hotel_id: Some(draft.hotel_id),
            room_type: Some(draft.room_type),
            capacity: Some(draft.capacity),
            price: Some(draft.price),
            available_dates: Some(draft.available_dates),
        }
    }
}

impl RoomDraft {
    pub fn validate(&self) -> DomainResult<()> {
        validate_capacity(self.capacity)?;
        validate_price(self.price)
    }
}

impl RoomPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

impl Room {
    pub fn apply(&mut self, patch: RoomPatch) {
        if let Some(hotel_id) = patch.hotel_id {
            self.hotel_id = hotel_id;
        }
        if let Some(room_type) = patch.room_type {
            self.room_type = room_type;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(dates) = patch.available_dates {
            self.available_dates = dates;
        }
        self.updated_at = Utc::now();
    }
}

fn validate_capacity(capacity: i32) -> DomainResult<()> {
    if capacity < 1 {
        return Err(DomainError::invalid_field(
            "capacity",
            "Ensure this value is greater than or equal to 1.",
        ));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::invalid_field(
            "price",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(DomainError::invalid_field(
            "price",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }
    Ok(())
}

/// Convert a validated price to integer minor units (cents).
pub fn price_to_minor(price: Decimal) -> DomainResult<i64> {
    let mut scaled = price;
    scaled.rescale(PRICE_SCALE);
    i64::try_from(scaled.mantissa())
        .map_err(|_| DomainError::invalid_field("price", "Price is out of range."))
}

pub fn price_from_minor(minor: i64) -> Decimal {
    Decimal::new(minor, PRICE_SCALE)
}
