use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battle_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alliance_member_id: i32,
    pub details: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alliance_member::Entity",
        from = "Column::AllianceMemberId",
        to = "super::alliance_member::Column::Id"
    )]
    AllianceMember,
}

impl Related<super::alliance_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllianceMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
