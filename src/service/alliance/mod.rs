//! Alliance resource service.
//!
//! Read paths for alliances, alliance members, and battle events. The alliance
//! listing is scoped by a direct `manager_id` filter (the filter predicate is
//! the authorization); every nested resource read is gated by the ownership
//! chain check before the row is fetched.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        alliance::AllianceRepository, alliance_member::AllianceMemberRepository,
        battle_event::BattleEventRepository,
    },
    error::{access::AccessError, Error},
    model::api::{AllianceDto, AllianceMemberDto, BattleEventDto},
    service::authz::{chain::OwnedResource, AuthzService},
};

pub struct AllianceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the alliances managed by the requesting user.
    ///
    /// Cannot fail authorization: the `manager_id` filter only ever returns
    /// rows the caller controls.
    pub async fn list_managed(&self, user_id: i32) -> Result<Vec<AllianceDto>, Error> {
        let alliances = AllianceRepository::new(self.db)
            .get_by_manager_id(user_id)
            .await?;

        Ok(alliances
            .into_iter()
            .map(|a| AllianceDto {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    /// List the members of an alliance the requesting user manages.
    pub async fn list_members(
        &self,
        user_id: i32,
        alliance_id: i32,
    ) -> Result<Vec<AllianceMemberDto>, Error> {
        AuthzService::new(self.db)
            .require(user_id, OwnedResource::Alliance(alliance_id))
            .await?;

        let members = AllianceMemberRepository::new(self.db)
            .get_by_alliance_id(alliance_id)
            .await?;

        Ok(members
            .into_iter()
            .map(|m| AllianceMemberDto {
                id: m.id,
                alliance_id: m.alliance_id,
                name: m.name,
            })
            .collect())
    }

    /// Get a single alliance member after a one-hop ownership check.
    pub async fn get_member(
        &self,
        user_id: i32,
        member_id: i32,
    ) -> Result<AllianceMemberDto, Error> {
        AuthzService::new(self.db)
            .require(user_id, OwnedResource::AllianceMember(member_id))
            .await?;

        // The row can disappear between the check and this read; surface that
        // as NotFound like any other missing resource.
        let member = AllianceMemberRepository::new(self.db)
            .get_by_id(member_id)
            .await?
            .ok_or(AccessError::NotFound)?;

        Ok(AllianceMemberDto {
            id: member.id,
            alliance_id: member.alliance_id,
            name: member.name,
        })
    }

    /// List the battle events of a member after a one-hop ownership check.
    pub async fn list_battle_events(
        &self,
        user_id: i32,
        member_id: i32,
    ) -> Result<Vec<BattleEventDto>, Error> {
        AuthzService::new(self.db)
            .require(user_id, OwnedResource::AllianceMember(member_id))
            .await?;

        let events = BattleEventRepository::new(self.db)
            .get_by_alliance_member_id(member_id)
            .await?;

        Ok(events
            .into_iter()
            .map(|e| BattleEventDto {
                id: e.id,
                alliance_member_id: e.alliance_member_id,
                details: e.details,
                created_at: e.created_at,
            })
            .collect())
    }

    /// Get a single battle event after a two-hop ownership check.
    pub async fn get_battle_event(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<BattleEventDto, Error> {
        AuthzService::new(self.db)
            .require(user_id, OwnedResource::BattleEvent(event_id))
            .await?;

        let event = BattleEventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or(AccessError::NotFound)?;

        Ok(BattleEventDto {
            id: event.id,
            alliance_member_id: event.alliance_member_id,
            details: event.details,
            created_at: event.created_at,
        })
    }
}
