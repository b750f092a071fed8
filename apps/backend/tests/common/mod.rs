//! Common test utilities and fixtures for integration tests.
//!
//! Every test gets its own in-memory state, so tests can run in parallel
//! without any external services.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use vocab_backend::{router, AppState};
use vocab_core::{QuizGenerator, WordStore};

/// Seed used for the practice generator in tests.
pub const TEST_SEED: u64 = 0x5eed;

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context over the seed words.
    pub fn new() -> Self {
        Self::with_store(WordStore::seeded())
    }

    /// Context over a caller-built store.
    pub fn with_store(store: WordStore) -> Self {
        let state = AppState::with_store(store, QuizGenerator::from_seed(TEST_SEED));
        let app = router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
