//! State

use std::sync::Arc;

use tally_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    /// Shared state over a fresh, empty receipt store.
    #[must_use]
    pub(crate) fn in_memory() -> Arc<Self> {
        Self::from_app_context(AppContext::in_memory())
    }
}
