//! Booking module — reservations and the no-overlap rule

pub mod service;

pub use service::{ReservationPatch, ReservationService};
