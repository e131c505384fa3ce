//! Receipts service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptsServiceError {
    #[error("receipt not found")]
    NotFound,
}
