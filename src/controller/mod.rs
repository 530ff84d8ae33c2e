pub mod alliance;
pub mod auth;
pub mod stats;
pub mod util;
