//! Hotel aggregate

pub mod model;
pub mod repository;

pub use model::{Hotel, HotelDraft, HotelPatch};
pub use repository::HotelRepository;
