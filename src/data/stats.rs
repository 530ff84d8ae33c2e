use chrono::Utc;
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::stats::{StatKind, StatRecord};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create or replace the stat record for a user.
    ///
    /// The write is keyed on `user_id` within the kind's table, so repeated
    /// writes leave exactly one record per (user, kind). `created_at` is
    /// refreshed on every call; conflict resolution is left to the store
    /// (last write wins).
    pub async fn upsert(
        &self,
        user_id: i32,
        kind: StatKind,
        stats: serde_json::Value,
    ) -> Result<StatRecord, DbErr> {
        let now = Utc::now().naive_utc();

        match kind {
            StatKind::Military => {
                let record = entity::military_stats::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    stats: ActiveValue::Set(stats),
                    created_at: ActiveValue::Set(now),
                };

                Ok(entity::prelude::MilitaryStats::insert(record)
                    .on_conflict(
                        OnConflict::column(entity::military_stats::Column::UserId)
                            .update_columns([
                                entity::military_stats::Column::Stats,
                                entity::military_stats::Column::CreatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec_with_returning(self.db)
                    .await?
                    .into())
            }
            StatKind::Resources => {
                let record = entity::resource_stats::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    stats: ActiveValue::Set(stats),
                    created_at: ActiveValue::Set(now),
                };

                Ok(entity::prelude::ResourceStats::insert(record)
                    .on_conflict(
                        OnConflict::column(entity::resource_stats::Column::UserId)
                            .update_columns([
                                entity::resource_stats::Column::Stats,
                                entity::resource_stats::Column::CreatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec_with_returning(self.db)
                    .await?
                    .into())
            }
            StatKind::Development => {
                let record = entity::development_stats::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    stats: ActiveValue::Set(stats),
                    created_at: ActiveValue::Set(now),
                };

                Ok(entity::prelude::DevelopmentStats::insert(record)
                    .on_conflict(
                        OnConflict::column(entity::development_stats::Column::UserId)
                            .update_columns([
                                entity::development_stats::Column::Stats,
                                entity::development_stats::Column::CreatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec_with_returning(self.db)
                    .await?
                    .into())
            }
        }
    }

    /// Get the stat record of a kind for a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
        kind: StatKind,
    ) -> Result<Option<StatRecord>, DbErr> {
        let record = match kind {
            StatKind::Military => entity::prelude::MilitaryStats::find_by_id(user_id)
                .one(self.db)
                .await?
                .map(StatRecord::from),
            StatKind::Resources => entity::prelude::ResourceStats::find_by_id(user_id)
                .one(self.db)
                .await?
                .map(StatRecord::from),
            StatKind::Development => entity::prelude::DevelopmentStats::find_by_id(user_id)
                .one(self.db)
                .await?
                .map(StatRecord::from),
        };

        Ok(record)
    }
}
