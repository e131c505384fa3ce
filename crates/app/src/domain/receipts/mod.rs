//! Receipts

pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::ReceiptsServiceError;
pub use service::*;
