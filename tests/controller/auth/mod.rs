//! Tests for auth controller endpoints.

mod get_user;
mod logout;

use super::*;
