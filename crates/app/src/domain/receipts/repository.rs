//! Receipts Repository
//!
//! Receipts live in memory for the lifetime of the process. Lookups take a
//! shared read lock; inserts hold the write lock for a single map insertion.

use std::{collections::hash_map::Entry, sync::Arc};

use mockall::automock;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tally::Receipt;
use tracing::debug;

use crate::domain::receipts::records::ReceiptUuid;

#[automock]
pub trait ReceiptsRepository: Send + Sync {
    /// Store a receipt under a freshly generated id and return the id.
    fn put(&self, receipt: Receipt) -> ReceiptUuid;

    /// Look up a stored receipt; `None` when the id was never issued.
    fn get(&self, uuid: ReceiptUuid) -> Option<Arc<Receipt>>;
}

#[derive(Debug, Default)]
pub struct InMemoryReceiptsRepository {
    receipts: RwLock<FxHashMap<ReceiptUuid, Arc<Receipt>>>,
}

impl InMemoryReceiptsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts.read().len()
    }

    /// Whether no receipt has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.receipts.read().is_empty()
    }
}

impl ReceiptsRepository for InMemoryReceiptsRepository {
    fn put(&self, receipt: Receipt) -> ReceiptUuid {
        let receipt = Arc::new(receipt);
        let mut receipts = self.receipts.write();

        loop {
            let uuid = ReceiptUuid::new_random();

            // Ids are random, so a collision only costs another draw.
            if let Entry::Vacant(entry) = receipts.entry(uuid) {
                entry.insert(receipt);

                debug!(%uuid, stored = receipts.len(), "stored receipt");

                return uuid;
            }
        }
    }

    fn get(&self, uuid: ReceiptUuid) -> Option<Arc<Receipt>> {
        self.receipts.read().get(&uuid).cloned()
    }
}
