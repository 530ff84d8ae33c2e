pub use super::alliance::Entity as Alliance;
pub use super::alliance_member::Entity as AllianceMember;
pub use super::battle_event::Entity as BattleEvent;
pub use super::development_stats::Entity as DevelopmentStats;
pub use super::military_stats::Entity as MilitaryStats;
pub use super::resource_stats::Entity as ResourceStats;
pub use super::user::Entity as User;
