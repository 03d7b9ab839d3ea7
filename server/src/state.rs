//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the tenant/appointment store, the optional email notifier and the
//! chat rate limiter. Clone is required by Axum; every field is cheap to clone.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::services::notify::Notifier;
use crate::services::store::ChatStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ChatStore>,
    /// `None` when email is not configured; bookings are still stored.
    pub notifier: Option<Notifier>,
    pub rate_limiter: RateLimiter,
    /// Tenant slug used when a request names no client or an unknown one.
    pub default_client: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ChatStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            notifier: config.email.as_ref().map(Notifier::new),
            rate_limiter: RateLimiter::new(),
            default_client: Arc::from(config.default_client.as_str()),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::store::MemoryStore;

    /// `AppState` over a seeded in-memory store. The store is returned too so
    /// tests can inspect what was written.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::seeded());
        let state = AppState::new(store.clone(), &ServerConfig::default());
        (state, store)
    }

    /// Same as [`test_app_state`] with a custom rate limiter.
    #[must_use]
    pub fn test_app_state_with_limiter(rate_limiter: RateLimiter) -> (AppState, Arc<MemoryStore>) {
        let (mut state, store) = test_app_state();
        state.rate_limiter = rate_limiter;
        (state, store)
    }
}
