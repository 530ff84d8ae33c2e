//! Game entity database insertion utilities.
//!
//! This module provides methods for inserting alliance, alliance member, and
//! battle event records into the test database. Parent rows are expected to
//! exist already; each method inserts exactly one row.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::game::GameFixtures};

impl<'a> GameFixtures<'a> {
    /// Insert an alliance managed by the given user.
    ///
    /// # Arguments
    /// - `manager_id` - ID of the user who manages the alliance
    ///
    /// # Returns
    /// - `Ok(Model)` - The created alliance record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_alliance(
        &self,
        manager_id: i32,
    ) -> Result<entity::alliance::Model, TestError> {
        Ok(
            entity::prelude::Alliance::insert(entity::alliance::ActiveModel {
                manager_id: ActiveValue::Set(manager_id),
                name: ActiveValue::Set("Test Alliance".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a member into the given alliance.
    ///
    /// # Arguments
    /// - `alliance_id` - ID of the alliance the member belongs to
    ///
    /// # Returns
    /// - `Ok(Model)` - The created alliance member record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_alliance_member(
        &self,
        alliance_id: i32,
    ) -> Result<entity::alliance_member::Model, TestError> {
        Ok(
            entity::prelude::AllianceMember::insert(entity::alliance_member::ActiveModel {
                alliance_id: ActiveValue::Set(alliance_id),
                name: ActiveValue::Set("Test Member".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a battle event for the given alliance member.
    ///
    /// # Arguments
    /// - `alliance_member_id` - ID of the member the event belongs to
    ///
    /// # Returns
    /// - `Ok(Model)` - The created battle event record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_battle_event(
        &self,
        alliance_member_id: i32,
    ) -> Result<entity::battle_event::Model, TestError> {
        Ok(
            entity::prelude::BattleEvent::insert(entity::battle_event::ActiveModel {
                alliance_member_id: ActiveValue::Set(alliance_member_id),
                details: ActiveValue::Set(serde_json::json!({
                    "outcome": "victory",
                    "losses": 3,
                })),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a full ownership chain for the given user.
    ///
    /// Creates an alliance managed by the user, a member in that alliance, and
    /// a battle event for that member.
    ///
    /// # Arguments
    /// - `manager_id` - ID of the user who manages the alliance
    ///
    /// # Returns
    /// - `Ok((alliance, member, event))` - The created records
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_chain(
        &self,
        manager_id: i32,
    ) -> Result<
        (
            entity::alliance::Model,
            entity::alliance_member::Model,
            entity::battle_event::Model,
        ),
        TestError,
    > {
        let alliance = self.insert_alliance(manager_id).await?;
        let member = self.insert_alliance_member(alliance.id).await?;
        let event = self.insert_battle_event(member.id).await?;

        Ok((alliance, member, event))
    }

    /// Delete an alliance, leaving any members behind with a dangling reference.
    ///
    /// Foreign key enforcement is disabled on the test connection, so child
    /// rows survive the delete. Useful for testing broken ownership chains.
    ///
    /// # Arguments
    /// - `alliance_id` - ID of the alliance to delete
    ///
    /// # Returns
    /// - `Ok(())` - The alliance row was deleted
    /// - `Err(TestError::DbErr)` - Database delete operation failed
    pub async fn delete_alliance(&self, alliance_id: i32) -> Result<(), TestError> {
        entity::prelude::Alliance::delete_by_id(alliance_id)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}
