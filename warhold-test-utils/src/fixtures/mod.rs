//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test
//! execution. Each submodule provides specialized fixtures for different aspects
//! of the system:
//!
//! - `user` - User records
//! - `game` - Alliances, alliance members, battle events

pub mod game;
pub mod user;
