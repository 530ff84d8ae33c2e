use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct BattleEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a battle event by its ID
    pub async fn get_by_id(
        &self,
        event_id: i32,
    ) -> Result<Option<entity::battle_event::Model>, DbErr> {
        entity::prelude::BattleEvent::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Get all battle events recorded for an alliance member
    pub async fn get_by_alliance_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::battle_event::Model>, DbErr> {
        entity::prelude::BattleEvent::find()
            .filter(entity::battle_event::Column::AllianceMemberId.eq(member_id))
            .order_by_asc(entity::battle_event::Column::Id)
            .all(self.db)
            .await
    }
}
