//! Test utilities for creating AppState in controller tests

use warhold::model::app::AppState;
use warhold_test_utils::TestContext;

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
        }
    }
}
