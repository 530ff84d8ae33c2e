//! Stat record service.
//!
//! Reads and writes the requesting user's own stat records. The write key is
//! always (authenticated user, kind) and there is no resource ID input on this
//! path, so a caller cannot target another user's record by construction.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    data::stats::StatsRepository,
    error::{stats::StatsError, Error},
    model::{api::StatsDto, stats::StatKind},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create or replace the caller's stat record of the given kind.
    ///
    /// Repeated calls with the same payload are idempotent in effect (one
    /// record per key, last write wins) but not in timestamp: `created_at` is
    /// refreshed on every write.
    ///
    /// # Returns
    /// - `Ok(StatsDto)` - The stored record as confirmation
    /// - `Err(Error::StatsError)` - Payload absent, not an object, or empty
    /// - `Err(Error::DbErr)` - The store signaled a failure; not retried here
    pub async fn upsert_stats(
        &self,
        user_id: i32,
        kind: StatKind,
        payload: Option<serde_json::Value>,
    ) -> Result<StatsDto, Error> {
        let stats = payload.ok_or(StatsError::EmptyPayload)?;

        let is_empty_object = stats.as_object().map(|o| o.is_empty()).unwrap_or(true);
        if is_empty_object {
            return Err(StatsError::EmptyPayload.into());
        }

        tracing::debug!("storing {kind} stat record for user {user_id}");

        let record = StatsRepository::new(self.db)
            .upsert(user_id, kind, stats)
            .await?;

        Ok(StatsDto {
            stats: record.stats,
            created_at: record.created_at,
        })
    }

    /// Get the caller's stat record of the given kind, if one has been written.
    pub async fn get_stats(
        &self,
        user_id: i32,
        kind: StatKind,
    ) -> Result<Option<StatsDto>, Error> {
        let record = StatsRepository::new(self.db)
            .get_by_user_id(user_id, kind)
            .await?;

        Ok(record.map(|r| StatsDto {
            stats: r.stats,
            created_at: r.created_at,
        }))
    }
}
