//! Service layer.
//!
//! Services hold the business rules of the gateway: the hierarchical ownership
//! authorization layer, alliance resource reads gated by it, and stat record
//! upserts scoped to the authenticated user. Services coordinate repositories
//! and never touch transport concerns.

pub mod alliance;
pub mod authz;
pub mod stats;
pub mod user;
