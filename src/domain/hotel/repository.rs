//! Hotel repository interface

use async_trait::async_trait;

use super::model::{Hotel, HotelDraft};
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Hotel>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>>;

    async fn create(&self, draft: HotelDraft) -> DomainResult<Hotel>;

    /// Overwrite the stored hotel with `hotel`.
    async fn update(&self, hotel: Hotel) -> DomainResult<Hotel>;

    /// Delete a hotel together with its rooms. Returns `false` if it did not exist.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
