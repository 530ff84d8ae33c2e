use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000002_alliance::Alliance;

static IDX_ALLIANCE_MEMBER_ALLIANCE_ID: &str = "idx_alliance_member_alliance_id";
static FK_ALLIANCE_MEMBER_ALLIANCE_ID: &str = "fk_alliance_member_alliance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllianceMember::Table)
                    .if_not_exists()
                    .col(pk_auto(AllianceMember::Id))
                    .col(integer(AllianceMember::AllianceId))
                    .col(string(AllianceMember::Name))
                    .col(timestamp(AllianceMember::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MEMBER_ALLIANCE_ID)
                    .table(AllianceMember::Table)
                    .col(AllianceMember::AllianceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBER_ALLIANCE_ID)
                    .from_tbl(AllianceMember::Table)
                    .from_col(AllianceMember::AllianceId)
                    .to_tbl(Alliance::Table)
                    .to_col(Alliance::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALLIANCE_MEMBER_ALLIANCE_ID)
                    .table(AllianceMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MEMBER_ALLIANCE_ID)
                    .table(AllianceMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AllianceMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AllianceMember {
    #[sea_orm(iden = "alliance_members")]
    Table,
    Id,
    AllianceId,
    Name,
    CreatedAt,
}
