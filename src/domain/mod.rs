//! Domain layer
//!
//! Aggregates (hotel, room, reservation, user), their repository
//! interfaces, and the authorization policy shared by every resource.

pub mod authorization;
pub mod hotel;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod user;

pub use authorization::{AccessRule, Actor, Operation, ResourcePolicy};
pub use hotel::{Hotel, HotelDraft, HotelPatch, HotelRepository};
pub use repositories::RepositoryProvider;
pub use reservation::{NewReservation, Reservation, ReservationRepository, StayPeriod};
pub use room::{
    Room, RoomDraft, RoomFilter, RoomOrderField, RoomOrdering, RoomPatch, RoomRepository,
};
pub use user::{CreateUserDto, User, UserRepository, UserRole};

pub use crate::shared::{DomainError, DomainResult};
