//! User service layer.
//!
//! User identities are created by the external identity provider integration;
//! this service only reads them so the session guard can confirm a session's
//! user still exists.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::Error, model::api::UserDto};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves user information.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(|u| UserDto { id: u.id }))
    }
}
