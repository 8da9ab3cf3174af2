use sea_orm_migration::prelude::*;

use crate::m20240610_092000_create_show_table::Show;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Show::Table)
                    .name("idx_start_time")
                    .col(Show::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Show::Table)
                    .name("idx_start_time")
                    .to_owned(),
            )
            .await
    }
}
