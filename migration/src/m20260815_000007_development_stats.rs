use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static FK_DEVELOPMENT_STATS_USER_ID: &str = "fk_development_stats_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DevelopmentStats::Table)
                    .if_not_exists()
                    .col(integer(DevelopmentStats::UserId).primary_key())
                    .col(json_binary(DevelopmentStats::Stats))
                    .col(timestamp(DevelopmentStats::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEVELOPMENT_STATS_USER_ID)
                    .from_tbl(DevelopmentStats::Table)
                    .from_col(DevelopmentStats::UserId)
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
                    .name(FK_DEVELOPMENT_STATS_USER_ID)
                    .table(DevelopmentStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DevelopmentStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DevelopmentStats {
    Table,
    UserId,
    Stats,
    CreatedAt,
}
