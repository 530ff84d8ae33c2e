//! Warhold server application core modules.
//!
//! This crate contains all server-side functionality for the Warhold data gateway,
//! including HTTP routing, session authentication, the hierarchical ownership
//! authorization layer, and database operations for player stat records and
//! alliance resources. Players read and write their own stat records; alliance
//! managers read subordinate records (members, battle events) for the alliances
//! they administer.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
