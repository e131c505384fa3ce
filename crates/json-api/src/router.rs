//! App Router

use salvo::Router;

use crate::receipts;

pub fn app_router() -> Router {
    Router::with_path("receipts")
        .push(Router::with_path("process").post(receipts::process::handler))
        .push(Router::with_path("{id}/points").get(receipts::points::handler))
}
