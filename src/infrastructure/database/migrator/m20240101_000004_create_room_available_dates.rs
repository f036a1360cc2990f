//! Create room_available_dates table
//!
//! Sparse set of dates on which each room is offered.

use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAvailableDates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAvailableDates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomAvailableDates::RoomId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomAvailableDates::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_available_dates_room")
                            .from(RoomAvailableDates::Table, RoomAvailableDates::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_available_dates_unique")
                    .table(RoomAvailableDates::Table)
                    .col(RoomAvailableDates::RoomId)
                    .col(RoomAvailableDates::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_available_dates_date")
                    .table(RoomAvailableDates::Table)
                    .col(RoomAvailableDates::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAvailableDates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomAvailableDates {
    Table,
    Id,
    RoomId,
    Date,
}
