use async_trait::async_trait;

use super::filter::RoomFilter;
use super::model::{Room, RoomDraft};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Room>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    async fn search(&self, filter: &RoomFilter) -> DomainResult<Vec<Room>>;

    async fn create(&self, draft: RoomDraft) -> DomainResult<Room>;

    /// Overwrite the stored room, including its available dates.
    async fn update(&self, room: Room) -> DomainResult<Room>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
