//! Receipt

use jiff::civil::{Date, Time};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::parsing::{ParseError, parse_amount, parse_purchase_date, parse_purchase_time};

/// Items on a receipt, stored inline for typical basket sizes.
pub type Items = SmallVec<[Item; 8]>;

/// A purchased line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: Decimal,
}

impl Item {
    /// Creates a new item with the given description and price
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }

    /// Returns the short description exactly as submitted
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A parsed purchase receipt.
///
/// Every field has already been validated, so scoring a receipt never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: Date,
    purchase_time: Time,
    items: Items,
    total: Decimal,
}

impl Receipt {
    /// Create a new receipt with the given details.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: Date,
        purchase_time: Time,
        items: impl IntoIterator<Item = Item>,
        total: Decimal,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date,
            purchase_time,
            items: items.into_iter().collect(),
            total,
        }
    }

    /// Name of the retailer
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Calendar date of the purchase
    pub fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Local time of the purchase
    pub fn purchase_time(&self) -> Time {
        self.purchase_time
    }

    /// Items in the order they were submitted
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total amount paid
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Wire form of a receipt, with dates, times and amounts still as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Name of the retailer
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,

    /// Purchase time, `HH:MM`
    pub purchase_time: String,

    /// Purchased items
    pub items: Vec<RawItem>,

    /// Total amount paid, as a decimal string
    pub total: String,
}

/// Wire form of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Short product description
    pub short_description: String,

    /// Price paid, as a decimal string
    pub price: String,
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = ParseError;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        let purchase_date = parse_purchase_date(&raw.purchase_date)?;
        let purchase_time = parse_purchase_time(&raw.purchase_time)?;

        let total = parse_amount(&raw.total).map_err(|source| ParseError::Total {
            value: raw.total.clone(),
            source,
        })?;

        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match parse_amount(&item.price) {
                Ok(price) => Ok(Item::new(item.short_description, price)),
                Err(source) => Err(ParseError::ItemPrice {
                    index,
                    value: item.price,
                    source,
                }),
            })
            .collect::<Result<Items, _>>()?;

        Ok(Self {
            retailer: raw.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}
