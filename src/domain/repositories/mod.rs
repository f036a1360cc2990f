//! Repository access for the domain layer

use super::hotel::HotelRepository;
use super::reservation::ReservationRepository;
use super::room::RoomRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let hotel = repos.hotels().find_by_id(1).await?;
///     let rooms = repos.rooms().search(&RoomFilter::default()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn hotels(&self) -> &dyn HotelRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn users(&self) -> &dyn UserRepository;
}
