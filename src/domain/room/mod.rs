//! Room aggregate
//!
//! Contains the Room entity, search filter, and repository interface.

pub mod filter;
pub mod model;
pub mod repository;

pub use filter::{RoomFilter, RoomOrderField, RoomOrdering};
pub use model::{Room, RoomDraft, RoomPatch};
pub use repository::RoomRepository;
