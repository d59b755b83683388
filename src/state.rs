//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It carries the runtime configuration and the session source used to
//! resolve cookies into sessions.

use std::sync::Arc;

use crate::config::Config;
use crate::session::SessionSource;

/// Clone is required by Axum; all fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, sessions: Arc<dyn SessionSource>) -> Self {
        Self { config: Arc::new(config), sessions }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
