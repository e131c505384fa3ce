//! Points
//!
//! A receipt's score is the sum of seven independent rules. No rule
//! suppresses another, and the round-dollar and quarter-multiple rules can
//! both fire for the same total.

use jiff::civil::{Date, Time, time};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::debug;

use crate::receipt::{Item, Receipt};

/// Awarded when the total has no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Awarded when the total is a positive multiple of 0.25.
pub const QUARTER_TOTAL_POINTS: u64 = 25;

/// Awarded for every two items on the receipt.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Awarded when the purchase day of month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Awarded for purchases strictly between 14:00 and 16:00.
pub const AFTERNOON_POINTS: u64 = 10;

const AFTERNOON_START: Time = time(14, 0, 0, 0);
const AFTERNOON_END: Time = time(16, 0, 0, 0);

/// Points contributed by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name
    pub retailer: u64,

    /// [`ROUND_TOTAL_POINTS`] if the total is a whole dollar amount
    pub round_total: u64,

    /// [`QUARTER_TOTAL_POINTS`] if the total is a multiple of 0.25
    pub quarter_total: u64,

    /// [`ITEM_PAIR_POINTS`] per pair of items
    pub item_pairs: u64,

    /// Price-based points for items whose trimmed description length is a multiple of 3
    pub descriptions: u64,

    /// [`ODD_DAY_POINTS`] if the purchase day is odd
    pub odd_day: u64,

    /// [`AFTERNOON_POINTS`] if the purchase happened between 14:00 and 16:00
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Apply every rule to the receipt.
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer: retailer_points(receipt.retailer()),
            round_total: round_total_points(receipt.total()),
            quarter_total: quarter_total_points(receipt.total()),
            item_pairs: item_pair_points(receipt.items().len()),
            descriptions: receipt
                .items()
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(receipt.purchase_date()),
            afternoon: afternoon_points(receipt.purchase_time()),
        }
    }

    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Calculate the points awarded for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    let breakdown = PointsBreakdown::from_receipt(receipt);
    let points = breakdown.total();

    debug!(?breakdown, points, "calculated receipt points");

    points
}

/// One point for every ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    saturating_count(retailer.chars().filter(char::is_ascii_alphanumeric).count())
}

/// [`ROUND_TOTAL_POINTS`] if the total has no fractional part.
pub fn round_total_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// [`QUARTER_TOTAL_POINTS`] if the total is above zero and a multiple of 0.25.
pub fn quarter_total_points(total: Decimal) -> u64 {
    let quarter = Decimal::new(25, 2);

    if total > Decimal::ZERO && (total % quarter).is_zero() {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// [`ITEM_PAIR_POINTS`] for every complete pair of items.
pub fn item_pair_points(item_count: usize) -> u64 {
    ITEM_PAIR_POINTS.saturating_mul(saturating_count(item_count / 2))
}

/// 20% of the item price, rounded up, if the trimmed description length is
/// a positive multiple of 3.
///
/// Length is measured in characters. Blank descriptions score nothing.
pub fn description_points(item: &Item) -> u64 {
    let length = item.short_description().trim().chars().count();

    if length == 0 || length % 3 != 0 {
        return 0;
    }

    item.price()
        .checked_mul(Decimal::new(2, 1))
        .and_then(|points| points.ceil().to_u64())
        .unwrap_or(u64::MAX)
}

/// [`ODD_DAY_POINTS`] if the day of the month is odd.
pub fn odd_day_points(purchase_date: Date) -> u64 {
    if purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// [`AFTERNOON_POINTS`] if the time is after 14:00 and before 16:00, both exclusive.
pub fn afternoon_points(purchase_time: Time) -> u64 {
    if purchase_time > AFTERNOON_START && purchase_time < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

fn saturating_count(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
