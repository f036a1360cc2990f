//! Room DTOs

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, Room, RoomDraft, RoomFilter, RoomOrdering, RoomPatch};

/// Body of `POST /rooms` and `PUT /rooms/{id}`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RoomRequest {
    /// Owning hotel ID
    pub hotel: i32,
    #[validate(length(min = 1, max = 100, message = "room_type must be 1-100 characters"))]
    pub room_type: String,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub capacity: i32,
    /// Nightly price with at most two decimal places
    pub price: Decimal,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
}

impl From<RoomRequest> for RoomDraft {
    fn from(req: RoomRequest) -> Self {
        Self {
            hotel_id: req.hotel,
            room_type: req.room_type,
            capacity: req.capacity,
            price: req.price,
            available_dates: req.available_dates.into_iter().collect(),
        }
    }
}

/// Body of `PATCH /rooms/{id}`. `available_dates` replaces the whole set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RoomPatchRequest {
    pub hotel: Option<i32>,
    #[validate(length(min = 1, max = 100, message = "room_type must be 1-100 characters"))]
    pub room_type: Option<String>,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub capacity: Option<i32>,
    pub price: Option<Decimal>,
    pub available_dates: Option<Vec<NaiveDate>>,
}

impl From<RoomPatchRequest> for RoomPatch {
    fn from(req: RoomPatchRequest) -> Self {
        Self {
            hotel_id: req.hotel,
            room_type: req.room_type,
            capacity: req.capacity,
            price: req.price,
            available_dates: req
                .available_dates
                .map(|dates| dates.into_iter().collect::<BTreeSet<_>>()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub hotel: i32,
    pub room_type: String,
    pub capacity: i32,
    /// Decimal string, e.g. `"120.00"`
    pub price: Decimal,
    /// Sorted ascending
    pub available_dates: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            hotel: r.hotel_id,
            room_type: r.room_type,
            capacity: r.capacity,
            price: r.price,
            available_dates: r.available_dates.into_iter().collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Query of `GET /hotel-rooms`. Empty values are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomSearchParams {
    /// Only rooms available on this date (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Exact capacity
    pub capacity: Option<String>,
    /// Exact room type
    pub room_type: Option<String>,
    /// Case-insensitive substring of the room type
    pub search: Option<String>,
    /// Comma-separated keys among `price`, `-price`, `capacity`, `-capacity`
    pub ordering: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RoomSearchParams {
    pub fn into_filter(self) -> DomainResult<RoomFilter> {
        let date = non_empty(self.date)
            .map(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d"))
            .transpose()
            .map_err(|_| DomainError::invalid_field("date", "Enter a valid date."))?;
        let capacity = non_empty(self.capacity)
            .map(|c| c.trim().parse::<i32>())
            .transpose()
            .map_err(|_| DomainError::invalid_field("capacity", "Enter a whole number."))?;

        Ok(RoomFilter {
            date,
            capacity,
            room_type: non_empty(self.room_type),
            search: non_empty(self.search).map(|s| s.trim().to_string()),
            ordering: non_empty(self.ordering)
                .map(|o| RoomOrdering::parse_list(&o))
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_mean_no_constraint() {
        let filter = RoomSearchParams {
            date: Some(String::new()),
            capacity: Some(" ".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert!(filter.date.is_none());
        assert!(filter.capacity.is_none());
        assert!(filter.ordering.is_empty());
    }

    #[test]
    fn malformed_date_is_a_field_error() {
        let err = RoomSearchParams {
            date: Some("06/01/2024".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "date", .. }));
    }

    #[test]
    fn price_is_serialized_as_string() {
        let now = Utc::now();
        let room = Room {
            id: 1,
            hotel_id: 2,
            room_type: "Suite".into(),
            capacity: 2,
            price: Decimal::new(12000, 2),
            available_dates: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(RoomResponse::from(room)).unwrap();
        assert_eq!(json["price"], "120.00");
        assert_eq!(json["hotel"], 2);
    }
}
