//! Hierarchical ownership authorization.
//!
//! Entitlement to alliance members and battle events is not a direct attribute
//! of those rows; it is derived by walking the ownership chain up to the
//! alliance's `manager_id`. This module contains the chain resolver and the
//! decision point that combines its result with the authenticated user.
//!
//! Authorization and the subsequent data read are separate store round trips,
//! not one transaction. A manager reassignment landing between the two is a
//! known, accepted race: the rows involved change far less often than requests
//! arrive. The check always precedes the data fetch.

pub mod chain;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    error::{access::AccessError, Error},
    service::authz::chain::{OwnedResource, OwnershipChain},
};

/// The outcome of an authorization decision.
///
/// Denial reasons stay distinct: a missing row (anywhere in the chain) is
/// `NotFound`, a resolved chain with a different controller is `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The resource, or an intermediate chain hop, does not exist.
    NotFound,
    /// The chain resolved but the caller is not the controller.
    Forbidden,
}

/// Decides whether an authenticated user may act on an ownership-derived resource.
///
/// The decision point never mutates state; it is a predicate over the chain
/// resolver's result plus a tagged denial reason.
pub struct AuthzService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthzService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the resource's controller and compare it to `user_id`.
    ///
    /// # Returns
    /// - `Ok(AccessDecision::Allow)` - The chain resolved to `user_id`
    /// - `Ok(AccessDecision::Deny(NotFound))` - A chain hop was missing
    /// - `Ok(AccessDecision::Deny(Forbidden))` - The chain resolved to another user
    /// - `Err(Error::DbErr)` - A point-read failed at the store level
    pub async fn authorize(
        &self,
        user_id: i32,
        resource: OwnedResource,
    ) -> Result<AccessDecision, Error> {
        let chain = OwnershipChain::new(self.db);

        let decision = match chain.resolve_controller(resource).await? {
            None => AccessDecision::Deny(DenyReason::NotFound),
            Some(controller) if controller == user_id => AccessDecision::Allow,
            Some(_) => AccessDecision::Deny(DenyReason::Forbidden),
        };

        Ok(decision)
    }

    /// Authorize and surface a denial as an [`AccessError`] for the response layer.
    pub async fn require(&self, user_id: i32, resource: OwnedResource) -> Result<(), Error> {
        match self.authorize(user_id, resource).await? {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(DenyReason::NotFound) => Err(AccessError::NotFound.into()),
            AccessDecision::Deny(DenyReason::Forbidden) => Err(AccessError::Forbidden.into()),
        }
    }
}
