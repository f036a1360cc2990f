//! Application layer — use cases over the domain repositories

pub mod booking;
pub mod catalog;
pub mod identity;

pub use booking::{ReservationPatch, ReservationService};
pub use catalog::CatalogService;
pub use identity::{AccessToken, AuthTokens, UserService};
