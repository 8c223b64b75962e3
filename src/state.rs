//! Shared application state for all routes.

use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected at startup; tests substitute an in-memory store.
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new<S: UserStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
