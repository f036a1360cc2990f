//! Database entities module

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod room_available_date;
pub mod user;

pub use hotel::Entity as Hotel;
pub use reservation::Entity as Reservation;
pub use room::Entity as Room;
pub use room_available_date::Entity as RoomAvailableDate;
pub use user::Entity as User;
