//! App Context

use std::sync::Arc;

use crate::domain::receipts::{InMemoryReceiptsService, ReceiptsService};

#[derive(Clone)]
pub struct AppContext {
    pub receipts: Arc<dyn ReceiptsService>,
}

impl AppContext {
    /// Build an application context backed by an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            receipts: Arc::new(InMemoryReceiptsService::default()),
        }
    }
}
