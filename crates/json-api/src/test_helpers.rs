//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use tally_app::{context::AppContext, domain::receipts::MockReceiptsService};

use crate::{json_errors::prefer_json, router::app_router, state::State};

pub(crate) fn state_with_receipts(receipts: MockReceiptsService) -> Arc<State> {
    State::from_app_context(AppContext {
        receipts: Arc::new(receipts),
    })
}

pub(crate) fn receipts_service(receipts: MockReceiptsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(prefer_json)
            .hoop(inject(state_with_receipts(receipts)))
            .push(route),
    )
}

/// The full router over an empty in-memory store.
pub(crate) fn in_memory_service() -> Service {
    Service::new(
        Router::new()
            .hoop(remove_slash())
            .hoop(prefer_json)
            .hoop(inject(State::in_memory()))
            .push(app_router()),
    )
}
