//! Tests for alliance controller endpoints.
//!
//! Every endpoint here runs the same pipeline: resolve the principal from
//! session, authorize the requested resource through its ownership chain, then
//! fetch it. The tests verify both the happy path and that denials keep their
//! distinct status codes.

mod get_alliance_member;
mod get_alliances;
mod get_battle_event;
mod get_member_battle_events;

use super::*;
