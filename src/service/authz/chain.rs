use sea_orm::{DatabaseConnection, DbErr};

use crate::data::{
    alliance::AllianceRepository, alliance_member::AllianceMemberRepository,
    battle_event::BattleEventRepository,
};

/// A resource whose controller is derived by walking the ownership chain.
///
/// None of these rows carry an access-control attribute of their own; the user
/// entitled to act on them is the `manager_id` of the alliance at the top of
/// their foreign-key chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedResource {
    /// Zero hops: the alliance row itself carries `manager_id`.
    Alliance(i32),
    /// One hop: member -> alliance.
    AllianceMember(i32),
    /// Two hops: event -> member -> alliance.
    BattleEvent(i32),
}

/// One step of the chain walk. Each variant holds the key for the next
/// point-read; `Controller` terminates the walk.
enum Hop {
    BattleEvent(i32),
    AllianceMember(i32),
    Alliance(i32),
    Controller(i32),
}

/// Resolves the controlling user of a resource by walking its ownership chain.
///
/// Each hop is a single keyed point-read and no row is fetched twice within a
/// resolution. A missing row at any hop short-circuits the walk to `Ok(None)`;
/// dangling foreign references are a resolution failure, not a crash.
pub struct OwnershipChain<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnershipChain<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Walk the chain from `resource` up to the managing user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Every hop resolved; `user_id` controls the resource
    /// - `Ok(None)` - The resource or an intermediate row does not exist
    /// - `Err(DbErr)` - A point-read failed at the store level
    pub async fn resolve_controller(&self, resource: OwnedResource) -> Result<Option<i32>, DbErr> {
        let mut hop = match resource {
            OwnedResource::Alliance(id) => Hop::Alliance(id),
            OwnedResource::AllianceMember(id) => Hop::AllianceMember(id),
            OwnedResource::BattleEvent(id) => Hop::BattleEvent(id),
        };

        loop {
            hop = match hop {
                Hop::BattleEvent(event_id) => {
                    match BattleEventRepository::new(self.db)
                        .get_by_id(event_id)
                        .await?
                    {
                        Some(event) => Hop::AllianceMember(event.alliance_member_id),
                        None => return Ok(None),
                    }
                }
                Hop::AllianceMember(member_id) => {
                    match AllianceMemberRepository::new(self.db)
                        .get_by_id(member_id)
                        .await?
                    {
                        Some(member) => Hop::Alliance(member.alliance_id),
                        None => return Ok(None),
                    }
                }
                Hop::Alliance(alliance_id) => {
                    match AllianceRepository::new(self.db).get_by_id(alliance_id).await? {
                        Some(alliance) => Hop::Controller(alliance.manager_id),
                        None => return Ok(None),
                    }
                }
                Hop::Controller(user_id) => return Ok(Some(user_id)),
            };
        }
    }
}
