//! Create rooms table
//!
//! Prices are stored as integer minor units.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_hotels::Hotels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(ColumnDef::new(Rooms::RoomType).string_len(100).not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::PriceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_hotel")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rooms {
    Table,
    Id,
    HotelId,
    RoomType,
    Capacity,
    PriceMinor,
    CreatedAt,
    UpdatedAt,
}
