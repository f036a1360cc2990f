//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, Hotel, HotelDraft, HotelRepository};
use crate::infrastructure::database::entities::hotel;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        address: m.address,
        city: m.city,
        description: m.description,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let models = hotel::Entity::find()
            .order_by_asc(hotel::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn create(&self, draft: HotelDraft) -> DomainResult<Hotel> {
        let now = Utc::now();
        let model = hotel::ActiveModel {
            name: Set(draft.name),
            address: Set(draft.address),
            city: Set(draft.city),
            description: Set(draft.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("Inserted hotel {}", model.id);
        Ok(model_to_domain(model))
    }

    async fn update(&self, h: Hotel) -> DomainResult<Hotel> {
        let existing = hotel::Entity::find_by_id(h.id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Hotel", h.id));
        };

        let mut model: hotel::ActiveModel = existing.into();
        model.name = Set(h.name);
        model.address = Set(h.address);
        model.city = Set(h.city);
        model.description = Set(h.description);
        model.updated_at = Set(h.updated_at);
        let updated = model.update(&self.db).await?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = hotel::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
