use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000003_alliance_member::AllianceMember;

static IDX_BATTLE_EVENT_ALLIANCE_MEMBER_ID: &str = "idx_battle_event_alliance_member_id";
static FK_BATTLE_EVENT_ALLIANCE_MEMBER_ID: &str = "fk_battle_event_alliance_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattleEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(BattleEvent::Id))
                    .col(integer(BattleEvent::AllianceMemberId))
                    .col(json_binary(BattleEvent::Details))
                    .col(timestamp(BattleEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BATTLE_EVENT_ALLIANCE_MEMBER_ID)
                    .table(BattleEvent::Table)
                    .col(BattleEvent::AllianceMemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATTLE_EVENT_ALLIANCE_MEMBER_ID)
                    .from_tbl(BattleEvent::Table)
                    .from_col(BattleEvent::AllianceMemberId)
                    .to_tbl(AllianceMember::Table)
                    .to_col(AllianceMember::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BATTLE_EVENT_ALLIANCE_MEMBER_ID)
                    .table(BattleEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BATTLE_EVENT_ALLIANCE_MEMBER_ID)
                    .table(BattleEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BattleEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BattleEvent {
    #[sea_orm(iden = "battle_events")]
    Table,
    Id,
    AllianceMemberId,
    Details,
    CreatedAt,
}
