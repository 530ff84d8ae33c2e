//! User database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::user::UserFixtures};

impl<'a> UserFixtures<'a> {
    /// Insert a user into the database.
    ///
    /// Creates a User record with an auto-assigned ID. Call repeatedly to
    /// create distinct users.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_user(&self) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
