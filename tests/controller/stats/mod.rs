//! Tests for stats controller endpoints.

mod get_stats;

use super::*;
