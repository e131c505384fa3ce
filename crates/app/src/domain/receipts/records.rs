//! Receipt Records

use tally::Receipt;

use crate::uuids::TypedUuid;

/// Receipt UUID
pub type ReceiptUuid = TypedUuid<Receipt>;
