//! SeaORM implementation of ReservationRepository
//!
//! Overlap check and write run in one serializable transaction.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::begin_serializable;
use crate::domain::{
    DomainError, DomainResult, NewReservation, Reservation, ReservationRepository, StayPeriod,
};
use crate::infrastructure::database::entities::{reservation, room};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let period = StayPeriod::new(m.check_in_date, m.check_out_date).map_err(|_| {
        DomainError::Storage(format!(
            "Reservation {} has an empty stay period",
            m.id
        ))
    })?;
    Ok(Reservation {
        id: m.id,
        room_id: m.room_id,
        user_id: m.user_id,
        period,
        created_at: m.created_at,
    })
}

/// The room must still exist when the booking is written.
async fn ensure_room<C: ConnectionTrait>(conn: &C, room_id: i32) -> DomainResult<()> {
    if room::Entity::find_by_id(room_id).one(conn).await?.is_none() {
        return Err(DomainError::unknown_reference("room", room_id));
    }
    Ok(())
}

/// Does any reservation on `room_id` other than `exclude` overlap `period`?
async fn has_overlap<C: ConnectionTrait>(
    conn: &C,
    room_id: i32,
    period: &StayPeriod,
    exclude: Option<i32>,
) -> Result<bool, DbErr> {
    let mut query = reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(room_id))
        .filter(reservation::Column::CheckInDate.lt(period.check_out()))
        .filter(reservation::Column::CheckOutDate.gt(period.check_in()));
    if let Some(id) = exclude {
        query = query.filter(reservation::Column::Id.ne(id));
    }
    Ok(query.count(conn).await? > 0)
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(model_to_domain)
            .transpose()
    }

    async fn insert_if_available(&self, r: NewReservation) -> DomainResult<Reservation> {
        let txn = begin_serializable(&self.db).await?;

        ensure_room(&txn, r.room_id).await?;
        if has_overlap(&txn, r.room_id, &r.period, None).await? {
            return Err(DomainError::BookingConflict);
        }

        let model = reservation::ActiveModel {
            room_id: Set(r.room_id),
            user_id: Set(r.user_id),
            check_in_date: Set(r.period.check_in()),
            check_out_date: Set(r.period.check_out()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        debug!("Inserted reservation {} for room {}", model.id, model.room_id);
        model_to_domain(model)
    }

    async fn update_if_available(
        &self,
        id: i32,
        room_id: i32,
        period: StayPeriod,
    ) -> DomainResult<Option<Reservation>> {
        let txn = begin_serializable(&self.db).await?;

        let Some(existing) = reservation::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        ensure_room(&txn, room_id).await?;
        if has_overlap(&txn, room_id, &period, Some(id)).await? {
            return Err(DomainError::BookingConflict);
        }

        let mut model: reservation::ActiveModel = existing.into();
        model.room_id = Set(room_id);
        model.check_in_date = Set(period.check_in());
        model.check_out_date = Set(period.check_out());
        let updated = model.update(&txn).await?;
        txn.commit().await?;

        model_to_domain(updated).map(Some)
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
