//! SeaORM implementation of RoomRepository
//!
//! Available dates live in `room_available_dates` and are loaded with a
//! second query per batch of rooms.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, Func, LikeExpr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::room::model::{price_from_minor, price_to_minor};
use crate::domain::{
    DomainError, DomainResult, Room, RoomDraft, RoomFilter, RoomOrderField, RoomRepository,
};
use crate::infrastructure::database::entities::{room, room_available_date};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run `query` and attach each room's available dates.
    async fn load(&self, query: Select<room::Entity>) -> DomainResult<Vec<Room>> {
        let models = query.all(&self.db).await?;
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut dates: HashMap<i32, BTreeSet<NaiveDate>> = HashMap::new();
        for row in room_available_date::Entity::find()
            .filter(room_available_date::Column::RoomId.is_in(ids))
            .all(&self.db)
            .await?
        {
            dates.entry(row.room_id).or_default().insert(row.date);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let available = dates.remove(&m.id).unwrap_or_default();
                model_to_domain(m, available)
            })
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: room::Model, available_dates: BTreeSet<NaiveDate>) -> Room {
    Room {
        id: m.id,
        hotel_id: m.hotel_id,
        room_type: m.room_type,
        capacity: m.capacity,
        price: price_from_minor(m.price_minor),
        available_dates,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

async fn replace_dates<C: ConnectionTrait>(
    conn: &C,
    room_id: i32,
    dates: &BTreeSet<NaiveDate>,
) -> DomainResult<()> {
    room_available_date::Entity::delete_many()
        .filter(room_available_date::Column::RoomId.eq(room_id))
        .exec(conn)
        .await?;

    if dates.is_empty() {
        return Ok(());
    }

    let rows = dates.iter().map(|date| room_available_date::ActiveModel {
        room_id: Set(room_id),
        date: Set(*date),
        ..Default::default()
    });
    room_available_date::Entity::insert_many(rows)
        .exec(conn)
        .await?;
    Ok(())
}

/// Escape LIKE wildcards so user input matches literally.
fn like_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

fn apply_filter(mut query: Select<room::Entity>, filter: &RoomFilter) -> Select<room::Entity> {
    if let Some(date) = filter.date {
        query = query.filter(
            room::Column::Id.in_subquery(
                Query::select()
                    .column(room_available_date::Column::RoomId)
                    .from(room_available_date::Entity)
                    .and_where(room_available_date::Column::Date.eq(date))
                    .to_owned(),
            ),
        );
    }
    if let Some(capacity) = filter.capacity {
        query = query.filter(room::Column::Capacity.eq(capacity));
    }
    if let Some(room_type) = &filter.room_type {
        query = query.filter(room::Column::RoomType.eq(room_type.as_str()));
    }
    if let Some(term) = &filter.search {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col(room::Column::RoomType))).like(like_pattern(term)),
        );
    }

    for key in &filter.ordering {
        let column = match key.field {
            RoomOrderField::Price => room::Column::PriceMinor,
            RoomOrderField::Capacity => room::Column::Capacity,
        };
        let order = if key.descending { Order::Desc } else { Order::Asc };
        query = query.order_by(column, order);
    }
    query.order_by_asc(room::Column::Id)
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        self.load(room::Entity::find().order_by_asc(room::Column::Id))
            .await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let rooms = self
            .load(room::Entity::find().filter(room::Column::Id.eq(id)))
            .await?;
        Ok(rooms.into_iter().next())
    }

    async fn search(&self, filter: &RoomFilter) -> DomainResult<Vec<Room>> {
        debug!(?filter, "Searching rooms");
        self.load(apply_filter(room::Entity::find(), filter)).await
    }

    async fn create(&self, draft: RoomDraft) -> DomainResult<Room> {
        let now = Utc::now();
        let price_minor = price_to_minor(draft.price)?;

        let txn = self.db.begin().await?;
        let model = room::ActiveModel {
            hotel_id: Set(draft.hotel_id),
            room_type: Set(draft.room_type),
            capacity: Set(draft.capacity),
            price_minor: Set(price_minor),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        replace_dates(&txn, model.id, &draft.available_dates).await?;
        txn.commit().await?;

        debug!("Inserted room {} for hotel {}", model.id, model.hotel_id);
        Ok(model_to_domain(model, draft.available_dates))
    }

    async fn update(&self, r: Room) -> DomainResult<Room> {
        let price_minor = price_to_minor(r.price)?;

        let txn = self.db.begin().await?;
        let existing = room::Entity::find_by_id(r.id).one(&txn).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Room", r.id));
        };

        let mut model: room::ActiveModel = existing.into();
        model.hotel_id = Set(r.hotel_id);
        model.room_type = Set(r.room_type);
        model.capacity = Set(r.capacity);
        model.price_minor = Set(price_minor);
        model.updated_at = Set(r.updated_at);
        let updated = model.update(&txn).await?;
        replace_dates(&txn, updated.id, &r.available_dates).await?;
        txn.commit().await?;

        Ok(model_to_domain(updated, r.available_dates))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = room::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
