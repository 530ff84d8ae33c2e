use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static FK_RESOURCE_STATS_USER_ID: &str = "fk_resource_stats_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceStats::Table)
                    .if_not_exists()
                    .col(integer(ResourceStats::UserId).primary_key())
                    .col(json_binary(ResourceStats::Stats))
                    .col(timestamp(ResourceStats::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_STATS_USER_ID)
                    .from_tbl(ResourceStats::Table)
                    .from_col(ResourceStats::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESOURCE_STATS_USER_ID)
                    .table(ResourceStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResourceStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ResourceStats {
    Table,
    UserId,
    Stats,
    CreatedAt,
}
