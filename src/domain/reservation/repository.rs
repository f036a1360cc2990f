use async_trait::async_trait;

use super::model::{NewReservation, Reservation, StayPeriod};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Insert `reservation` unless another reservation on the same room
    /// overlaps its period. The check and the insert share one transaction.
    ///
    /// Returns `BookingConflict` on overlap and `InvalidField` on `room` if
    /// the room no longer exists.
    async fn insert_if_available(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Move reservation `id` to `room_id` and `period`, with the same overlap
    /// rule as [`insert_if_available`](Self::insert_if_available). The
    /// reservation itself is excluded from the check.
    ///
    /// Returns `Ok(None)` if the reservation does not exist.
    async fn update_if_available(
        &self,
        id: i32,
        room_id: i32,
        period: StayPeriod,
    ) -> DomainResult<Option<Reservation>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
