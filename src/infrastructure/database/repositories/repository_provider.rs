//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    HotelRepository, RepositoryProvider, ReservationRepository, RoomRepository, UserRepository,
};

use super::hotel_repository::SeaOrmHotelRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let hotel = repos.hotels().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    hotels: SeaOrmHotelRepository,
    rooms: SeaOrmRoomRepository,
    reservations: SeaOrmReservationRepository,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hotels: SeaOrmHotelRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}
