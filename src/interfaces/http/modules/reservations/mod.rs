//! Reservations module — booking CRUD with overlap rejection

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
