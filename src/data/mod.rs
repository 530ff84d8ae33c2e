//! Data access layer.
//!
//! Repositories wrap sea-orm queries behind small structs holding a database
//! connection reference. Each repository performs keyed point-reads, filtered
//! reads, or upserts against a single collection and surfaces `DbErr` directly;
//! mapping store failures to API responses happens further up.

pub mod alliance;
pub mod alliance_member;
pub mod battle_event;
pub mod stats;
pub mod user;
