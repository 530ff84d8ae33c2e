use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AllianceMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an alliance member by its ID
    pub async fn get_by_id(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::alliance_member::Model>, DbErr> {
        entity::prelude::AllianceMember::find_by_id(member_id)
            .one(self.db)
            .await
    }

    /// Get all members of an alliance
    pub async fn get_by_alliance_id(
        &self,
        alliance_id: i32,
    ) -> Result<Vec<entity::alliance_member::Model>, DbErr> {
        entity::prelude::AllianceMember::find()
            .filter(entity::alliance_member::Column::AllianceId.eq(alliance_id))
            .order_by_asc(entity::alliance_member::Column::Id)
            .all(self.db)
            .await
    }
}
