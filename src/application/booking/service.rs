//! Reservation service
//!
//! Creating or moving a reservation goes through one in-process lock and a
//! repository call that checks for overlap and writes in the same database
//! transaction. Two overlapping requests for one room therefore never both
//! succeed.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::authorization::RESERVATION_POLICY;
use crate::domain::{
    Actor, DomainError, DomainResult, NewReservation, Operation, RepositoryProvider, Reservation,
    StayPeriod,
};

/// Fields of a partial reservation update.
#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub room_id: Option<i32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    booking_lock: Mutex<()>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            booking_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self, actor: &dyn Actor) -> DomainResult<Vec<Reservation>> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::List)?;
        self.repos.reservations().find_all().await
    }

    pub async fn get(&self, actor: &dyn Actor, id: i32) -> DomainResult<Reservation> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::Retrieve)?;
        self.load(id).await
    }

    /// Book `room_id` for `[check_in, check_out)` on behalf of `actor`.
    pub async fn create(
        &self,
        actor: &dyn Actor,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Reservation> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::Create)?;
        let period = StayPeriod::new(check_in, check_out)?;

        let result = {
            let _guard = self.booking_lock.lock().await;
            self.repos
                .reservations()
                .insert_if_available(NewReservation {
                    room_id,
                    user_id: actor.actor_id().to_string(),
                    period,
                })
                .await
        };

        match result {
            Ok(reservation) => {
                info!(
                    reservation_id = reservation.id,
                    room_id,
                    user_id = actor.actor_id(),
                    %check_in,
                    %check_out,
                    nights = period.nights(),
                    "Reservation created"
                );
                Ok(reservation)
            }
            Err(e) => Err(log_rejection(e, room_id, &period)),
        }
    }

    /// Full replacement (`PUT`). The booking user is kept.
    pub async fn update(
        &self,
        actor: &dyn Actor,
        id: i32,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Reservation> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::Update)?;
        let period = StayPeriod::new(check_in, check_out)?;
        self.reschedule(id, room_id, period).await
    }

    pub async fn patch(
        &self,
        actor: &dyn Actor,
        id: i32,
        patch: ReservationPatch,
    ) -> DomainResult<Reservation> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::PartialUpdate)?;
        let current = self.load(id).await?;
        let room_id = patch.room_id.unwrap_or(current.room_id);
        let period = StayPeriod::new(
            patch.check_in.unwrap_or(current.period.check_in()),
            patch.check_out.unwrap_or(current.period.check_out()),
        )?;
        self.reschedule(id, room_id, period).await
    }

    pub async fn delete(&self, actor: &dyn Actor, id: i32) -> DomainResult<()> {
        RESERVATION_POLICY.authorize(Some(actor), Operation::Destroy)?;
        if !self.repos.reservations().delete(id).await? {
            return Err(DomainError::not_found("Reservation", id));
        }
        info!(reservation_id = id, by = actor.actor_id(), "Reservation deleted");
        Ok(())
    }

    async fn reschedule(
        &self,
        id: i32,
        room_id: i32,
        period: StayPeriod,
    ) -> DomainResult<Reservation> {
        let result = {
            let _guard = self.booking_lock.lock().await;
            self.repos
                .reservations()
                .update_if_available(id, room_id, period)
                .await
        };

        match result {
            Ok(Some(reservation)) => {
                info!(reservation_id = id, room_id, "Reservation updated");
                Ok(reservation)
            }
            Ok(None) => Err(DomainError::not_found("Reservation", id)),
            Err(e) => Err(log_rejection(e, room_id, &period)),
        }
    }

    async fn load(&self, id: i32) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }
}

fn log_rejection(e: DomainError, room_id: i32, period: &StayPeriod) -> DomainError {
    if matches!(e, DomainError::BookingConflict) {
        info!(
            room_id,
            check_in = %period.check_in(),
            check_out = %period.check_out(),
            "Booking rejected: dates overlap an existing reservation"
        );
    }
    e
}
