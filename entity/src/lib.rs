pub mod prelude;

pub mod alliance;
pub mod alliance_member;
pub mod battle_event;
pub mod development_stats;
pub mod military_stats;
pub mod resource_stats;
pub mod user;
