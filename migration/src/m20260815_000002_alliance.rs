use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_user::User;

static IDX_ALLIANCE_MANAGER_ID: &str = "idx_alliance_manager_id";
static FK_ALLIANCE_MANAGER_ID: &str = "fk_alliance_manager_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliance::Table)
                    .if_not_exists()
                    .col(pk_auto(Alliance::Id))
                    .col(integer(Alliance::ManagerId))
                    .col(string(Alliance::Name))
                    .col(timestamp(Alliance::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MANAGER_ID)
                    .table(Alliance::Table)
                    .col(Alliance::ManagerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MANAGER_ID)
                    .from_tbl(Alliance::Table)
                    .from_col(Alliance::ManagerId)
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
                    .name(FK_ALLIANCE_MANAGER_ID)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MANAGER_ID)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alliance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alliance {
    #[sea_orm(iden = "alliances")]
    Table,
    Id,
    ManagerId,
    Name,
    CreatedAt,
}
