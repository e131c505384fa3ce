//! Get Points Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::debug;

use tally_app::domain::receipts::records::ReceiptUuid;

use crate::{
    extensions::*,
    receipts::errors::{RECEIPT_NOT_FOUND, into_status_error},
    state::State,
};

/// Get Points Handler
///
/// Returns the points awarded to a processed receipt as a bare integer.
#[endpoint(
    tags("receipts"),
    summary = "Get Receipt Points",
    responses(
        (status_code = StatusCode::OK, description = "Points awarded to the receipt"),
        (status_code = StatusCode::NOT_FOUND, description = "No receipt with that id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<u64>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // Ids we never issued cannot be stored, whatever their shape.
    let uuid: ReceiptUuid = id.into_inner().parse().map_err(|error| {
        debug!("unrecognised receipt id: {error}");

        StatusError::not_found().brief(RECEIPT_NOT_FOUND)
    })?;

    let points = state
        .app
        .receipts
        .get_points(uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(points))
}
