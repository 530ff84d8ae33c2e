use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alliance::Entity")]
    Alliance,
    #[sea_orm(has_one = "super::military_stats::Entity")]
    MilitaryStats,
    #[sea_orm(has_one = "super::resource_stats::Entity")]
    ResourceStats,
    #[sea_orm(has_one = "super::development_stats::Entity")]
    DevelopmentStats,
}

impl Related<super::alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alliance.def()
    }
}

impl Related<super::military_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MilitaryStats.def()
    }
}

impl Related<super::resource_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceStats.def()
    }
}

impl Related<super::development_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DevelopmentStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
