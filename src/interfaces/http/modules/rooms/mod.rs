//! Rooms module — catalog CRUD and the filtered `/hotel-rooms` listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
