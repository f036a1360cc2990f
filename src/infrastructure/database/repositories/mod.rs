//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod hotel_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod user_repository;

pub use hotel_repository::SeaOrmHotelRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use room_repository::SeaOrmRoomRepository;
pub use user_repository::SeaOrmUserRepository;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel,
    TransactionTrait,
};

/// Open a transaction at the strictest isolation the backend supports.
///
/// SQLite transactions are already serializable and reject an explicit level.
pub(crate) async fn begin_serializable(
    db: &DatabaseConnection,
) -> Result<DatabaseTransaction, DbErr> {
    let isolation = match db.get_database_backend() {
        DbBackend::Sqlite => None,
        _ => Some(IsolationLevel::Serializable),
    };
    db.begin_with_config(isolation, None).await
}
