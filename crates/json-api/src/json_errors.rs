//! JSON error bodies
//!
//! Salvo renders a `StatusError` in the format the client asks for and falls
//! back to HTML. Clients of this API that send no `Accept` header, or only a
//! wildcard, get JSON instead.

use salvo::{
    handler,
    http::header::{ACCEPT, HeaderValue},
    prelude::Request,
};

const APPLICATION_JSON: &str = "application/json";

#[handler]
pub(crate) async fn prefer_json(req: &mut Request) {
    let prefers_any = req
        .accept()
        .first()
        .is_none_or(|mime| mime.type_().as_str() == "*");

    if prefers_any {
        req.headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    }
}
