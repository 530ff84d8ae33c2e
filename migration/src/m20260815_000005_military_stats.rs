use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static FK_MILITARY_STATS_USER_ID: &str = "fk_military_stats_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MilitaryStats::Table)
                    .if_not_exists()
                    .col(integer(MilitaryStats::UserId).primary_key())
                    .col(json_binary(MilitaryStats::Stats))
                    .col(timestamp(MilitaryStats::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MILITARY_STATS_USER_ID)
                    .from_tbl(MilitaryStats::Table)
                    .from_col(MilitaryStats::UserId)
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
                    .name(FK_MILITARY_STATS_USER_ID)
                    .table(MilitaryStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MilitaryStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MilitaryStats {
    Table,
    UserId,
    Stats,
    CreatedAt,
}
