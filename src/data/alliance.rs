use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AllianceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an alliance by its ID
    pub async fn get_by_id(
        &self,
        alliance_id: i32,
    ) -> Result<Option<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find_by_id(alliance_id)
            .one(self.db)
            .await
    }

    /// Get all alliances managed by a user
    ///
    /// This is a direct filter on `manager_id`: the filter predicate is the
    /// authorization for the alliance listing, no ownership chain is walked.
    pub async fn get_by_manager_id(
        &self,
        manager_id: i32,
    ) -> Result<Vec<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::ManagerId.eq(manager_id))
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await
    }
}
