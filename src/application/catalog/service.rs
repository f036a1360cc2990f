//! Catalog service — application-layer orchestration for hotels and rooms

use std::sync::Arc;

use tracing::info;

use crate::domain::authorization::{HOTEL_POLICY, ROOM_POLICY, ROOM_SEARCH_POLICY};
use crate::domain::{
    Actor, DomainError, DomainResult, Hotel, HotelDraft, HotelPatch, Operation,
    RepositoryProvider, Room, RoomDraft, RoomFilter, RoomPatch,
};

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Hotels ──────────────────────────────────────────────────

    pub async fn list_hotels(&self, actor: &dyn Actor) -> DomainResult<Vec<Hotel>> {
        HOTEL_POLICY.authorize(Some(actor), Operation::List)?;
        self.repos.hotels().find_all().await
    }

    pub async fn get_hotel(&self, actor: &dyn Actor, id: i32) -> DomainResult<Hotel> {
        HOTEL_POLICY.authorize(Some(actor), Operation::Retrieve)?;
        self.load_hotel(id).await
    }

    pub async fn create_hotel(&self, actor: &dyn Actor, draft: HotelDraft) -> DomainResult<Hotel> {
        HOTEL_POLICY.authorize(Some(actor), Operation::Create)?;
        let hotel = self.repos.hotels().create(draft).await?;
        info!(hotel_id = hotel.id, name = %hotel.name, by = actor.actor_id(), "Hotel created");
        Ok(hotel)
    }

    /// Full replacement (`PUT`).
    pub async fn update_hotel(
        &self,
        actor: &dyn Actor,
        id: i32,
        draft: HotelDraft,
    ) -> DomainResult<Hotel> {
        HOTEL_POLICY.authorize(Some(actor), Operation::Update)?;
        self.modify_hotel(id, draft.into()).await
    }

    pub async fn patch_hotel(
        &self,
        actor: &dyn Actor,
        id: i32,
        patch: HotelPatch,
    ) -> DomainResult<Hotel> {
        HOTEL_POLICY.authorize(Some(actor), Operation::PartialUpdate)?;
        self.modify_hotel(id, patch).await
    }

    /// Removes the hotel together with its rooms and their reservations.
    pub async fn delete_hotel(&self, actor: &dyn Actor, id: i32) -> DomainResult<()> {
        HOTEL_POLICY.authorize(Some(actor), Operation::Destroy)?;
        if !self.repos.hotels().delete(id).await? {
            return Err(DomainError::not_found("Hotel", id));
        }
        info!(hotel_id = id, by = actor.actor_id(), "Hotel deleted");
        Ok(())
    }

    async fn load_hotel(&self, id: i32) -> DomainResult<Hotel> {
        self.repos
            .hotels()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Hotel", id))
    }

    async fn modify_hotel(&self, id: i32, patch: HotelPatch) -> DomainResult<Hotel> {
        let mut hotel = self.load_hotel(id).await?;
        hotel.apply(patch);
        self.repos.hotels().update(hotel).await
    }

    // ── Rooms ───────────────────────────────────────────────────

    pub async fn list_rooms(&self, actor: &dyn Actor) -> DomainResult<Vec<Room>> {
        ROOM_POLICY.authorize(Some(actor), Operation::List)?;
        self.repos.rooms().find_all().await
    }

    pub async fn get_room(&self, actor: &dyn Actor, id: i32) -> DomainResult<Room> {
        ROOM_POLICY.authorize(Some(actor), Operation::Retrieve)?;
        self.load_room(id).await
    }

    pub async fn create_room(&self, actor: &dyn Actor, draft: RoomDraft) -> DomainResult<Room> {
        ROOM_POLICY.authorize(Some(actor), Operation::Create)?;
        draft.validate()?;
        self.ensure_hotel_exists(draft.hotel_id).await?;

        let room = self.repos.rooms().create(draft).await?;
        info!(
            room_id = room.id,
            hotel_id = room.hotel_id,
            room_type = %room.room_type,
            by = actor.actor_id(),
            "Room created"
        );
        Ok(room)
    }

    /// Full replacement (`PUT`).
    pub async fn update_room(
        &self,
        actor: &dyn Actor,
        id: i32,
        draft: RoomDraft,
    ) -> DomainResult<Room> {
        ROOM_POLICY.authorize(Some(actor), Operation::Update)?;
        draft.validate()?;
        self.modify_room(id, draft.into()).await
    }

    pub async fn patch_room(&self, actor: &dyn Actor, id: i32, patch: RoomPatch) -> DomainResult<Room> {
        ROOM_POLICY.authorize(Some(actor), Operation::PartialUpdate)?;
        patch.validate()?;
        self.modify_room(id, patch).await
    }

    pub async fn delete_room(&self, actor: &dyn Actor, id: i32) -> DomainResult<()> {
        ROOM_POLICY.authorize(Some(actor), Operation::Destroy)?;
        if !self.repos.rooms().delete(id).await? {
            return Err(DomainError::not_found("Room", id));
        }
        info!(room_id = id, by = actor.actor_id(), "Room deleted");
        Ok(())
    }

    /// Filtered room listing behind `/hotel-rooms`.
    pub async fn search_rooms(&self, actor: &dyn Actor, filter: &RoomFilter) -> DomainResult<Vec<Room>> {
        ROOM_SEARCH_POLICY.authorize(Some(actor), Operation::List)?;
        self.repos.rooms().search(filter).await
    }

    async fn load_room(&self, id: i32) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", id))
    }

    async fn modify_room(&self, id: i32, patch: RoomPatch) -> DomainResult<Room> {
        let mut room = self.load_room(id).await?;
        if let Some(hotel_id) = patch.hotel_id {
            self.ensure_hotel_exists(hotel_id).await?;
        }
        room.apply(patch);
        self.repos.rooms().update(room).await
    }

    async fn ensure_hotel_exists(&self, hotel_id: i32) -> DomainResult<()> {
        if self.repos.hotels().find_by_id(hotel_id).await?.is_none() {
            return Err(DomainError::unknown_reference("hotel", hotel_id));
        }
        Ok(())
    }
}
