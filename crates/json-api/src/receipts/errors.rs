//! Errors

use salvo::http::StatusError;

use tally_app::domain::receipts::ReceiptsServiceError;

pub(crate) const RECEIPT_NOT_FOUND: &str = "Receipt not found";

pub(crate) fn into_status_error(error: ReceiptsServiceError) -> StatusError {
    match error {
        ReceiptsServiceError::NotFound => StatusError::not_found().brief(RECEIPT_NOT_FOUND),
    }
}
