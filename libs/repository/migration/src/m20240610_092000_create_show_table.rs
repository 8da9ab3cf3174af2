use sea_orm_migration::prelude::*;

use crate::m20240610_091800_create_venue_table::Venue;
use crate::m20240610_091900_create_artist_table::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Show::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Show::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Show::StartTime)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Show::ArtistId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-artist_id")
                            .from(Show::Table, Show::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(Show::VenueId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-venue_id")
                            .from(Show::Table, Show::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Show::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Show {
    Table,
    Id,
    StartTime,
    ArtistId,
    VenueId,
}
