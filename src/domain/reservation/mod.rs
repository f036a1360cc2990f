//! Reservation aggregate
//!
//! Contains the Reservation entity, its stay period, and repository interface.

pub mod model;
pub mod repository;

pub use model::{NewReservation, Reservation, StayPeriod};
pub use repository::ReservationRepository;
