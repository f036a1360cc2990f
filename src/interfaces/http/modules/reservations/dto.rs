//! Reservation DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ReservationPatch;
use crate::domain::Reservation;

/// Body of `POST /reservations` and `PUT /reservations/{id}`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReservationRequest {
    /// Room ID
    pub room: i32,
    pub check_in_date: NaiveDate,
    /// Exclusive: the room is free again on this date
    pub check_out_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReservationPatchRequest {
    pub room: Option<i32>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

impl From<ReservationPatchRequest> for ReservationPatch {
    fn from(req: ReservationPatchRequest) -> Self {
        Self {
            room_id: req.room,
            check_in: req.check_in_date,
            check_out: req.check_out_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub room: i32,
    /// Booking user ID
    pub user: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            room: r.room_id,
            user: r.user_id,
            check_in_date: r.period.check_in(),
            check_out_date: r.period.check_out(),
            created_at: r.created_at,
        }
    }
}
