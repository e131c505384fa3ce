//! Receipts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tally::{Receipt, calculate_points};
use tracing::{debug, info};

use crate::domain::receipts::{
    errors::ReceiptsServiceError,
    records::ReceiptUuid,
    repository::{InMemoryReceiptsRepository, ReceiptsRepository},
};

#[derive(Clone)]
pub struct InMemoryReceiptsService {
    repository: Arc<dyn ReceiptsRepository>,
}

impl InMemoryReceiptsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ReceiptsRepository>) -> Self {
        Self { repository }
    }
}

impl Default for InMemoryReceiptsService {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryReceiptsRepository::new()))
    }
}

#[async_trait]
impl ReceiptsService for InMemoryReceiptsService {
    async fn process_receipt(&self, receipt: Receipt) -> Result<ReceiptUuid, ReceiptsServiceError> {
        let items = receipt.items().len();
        let uuid = self.repository.put(receipt);

        info!(%uuid, items, "processed receipt");

        Ok(uuid)
    }

    async fn get_points(&self, uuid: ReceiptUuid) -> Result<u64, ReceiptsServiceError> {
        let Some(receipt) = self.repository.get(uuid) else {
            debug!(%uuid, "receipt not found");

            return Err(ReceiptsServiceError::NotFound);
        };

        Ok(calculate_points(&receipt))
    }
}

#[automock]
#[async_trait]
pub trait ReceiptsService: Send + Sync {
    /// Store a receipt and return the id it can be fetched with.
    async fn process_receipt(&self, receipt: Receipt) -> Result<ReceiptUuid, ReceiptsServiceError>;

    /// Score a previously processed receipt.
    async fn get_points(&self, uuid: ReceiptUuid) -> Result<u64, ReceiptsServiceError>;
}
