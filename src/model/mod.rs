pub mod api;
pub mod app;
pub mod session;
pub mod stats;
